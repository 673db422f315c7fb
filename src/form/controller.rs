use crate::error::FormError;
use crate::form::binding::{ActionTag, SelectedItem, TextField};
use crate::form::view::{ContentChange, FormView, SelectionControl, TextControl};
use crate::itinerary::ItineraryModel;
use crate::options::OptionSet;
use tracing::{debug, info, warn};

pub const INVALID_FORM_MESSAGE: &str = "One or more fields contain invalid and/or default entries!\nPlease ensure all fields are populated with valid entries before submitting.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(String),
    Rejected(&'static str),
}

impl SubmitOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted(_) => "Confirmation Message",
            SubmitOutcome::Rejected(_) => "Error Message",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Accepted(body) => body,
            SubmitOutcome::Rejected(body) => body,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Keeps the itinerary in step with the controls. Writes flow from the
/// controls into the model only; validity is looked at on submit.
pub struct FormController {
    model: ItineraryModel,
    last_outcome: Option<SubmitOutcome>,
}

impl FormController {
    pub fn new(model: ItineraryModel, view: &mut FormView, options: &OptionSet) -> Result<Self, FormError> {
        let controller = FormController {
            model,
            last_outcome: None,
        };
        controller.provide_options(view, options);
        controller.sync_view(view)?;
        Ok(controller)
    }

    pub fn model(&self) -> &ItineraryModel {
        &self.model
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    fn provide_options(&self, view: &mut FormView, options: &OptionSet) {
        for tag in ActionTag::ALL {
            let items = match tag {
                ActionTag::DepartureMonth | ActionTag::ReturnMonth => Self::text_items(&options.months),
                ActionTag::DepartureDay | ActionTag::ReturnDay => Self::text_items(&options.days),
                ActionTag::DepartureYear | ActionTag::ReturnYear => Self::text_items(&options.years),
                ActionTag::DepartureTime | ActionTag::ReturnTime => Self::text_items(&options.times),
                ActionTag::Passengers => options.passengers.iter().copied().map(SelectedItem::Count).collect(),
            };
            view.selection_mut(tag).set_items(items);
        }
    }

    fn text_items(list: &[String]) -> Vec<SelectedItem> {
        list.iter().cloned().map(SelectedItem::Text).collect()
    }

    // push the model's current values into the controls
    fn sync_view(&self, view: &mut FormView) -> Result<(), FormError> {
        view.text_mut(TextField::Origin).set_text(self.model.origin());
        view.text_mut(TextField::Destination).set_text(self.model.destination());
        for tag in ActionTag::ALL {
            let label = self.current_label(tag);
            view.selection_mut(tag).select(&label)?;
        }
        Ok(())
    }

    fn current_label(&self, tag: ActionTag) -> String {
        let departure = self.model.departure_date();
        let ret = self.model.return_date();
        match tag {
            ActionTag::DepartureMonth => departure.month().to_string(),
            ActionTag::DepartureDay => departure.day().to_string(),
            ActionTag::DepartureYear => departure.year().to_string(),
            ActionTag::DepartureTime => departure.time_preference().to_string(),
            ActionTag::ReturnMonth => ret.month().to_string(),
            ActionTag::ReturnDay => ret.day().to_string(),
            ActionTag::ReturnYear => ret.year().to_string(),
            ActionTag::ReturnTime => ret.time_preference().to_string(),
            ActionTag::Passengers => self.model.passenger_count().to_string(),
        }
    }

    /// Content of a text control changed; copy all of it into the field
    /// the control is tagged with.
    pub fn on_content_changed(&mut self, control: &TextControl, change: ContentChange) {
        let text = control.text();
        debug!(field = %control.field(), ?change, text, "text changed");
        match control.field() {
            TextField::Origin => self.model.set_origin(text),
            TextField::Destination => self.model.set_destination(text),
        }
    }

    /// Types `text` into a control one character at a time, forwarding
    /// every change.
    pub fn type_text(&mut self, view: &mut FormView, field: TextField, text: &str) {
        for c in text.chars() {
            let change = view.text_mut(field).insert_char(c);
            self.on_content_changed(view.text(field), change);
        }
    }

    /// Removes up to `count` trailing characters, one notification each.
    pub fn erase(&mut self, view: &mut FormView, field: TextField, count: usize) {
        for _ in 0..count {
            match view.text_mut(field).remove_char() {
                Some(change) => self.on_content_changed(view.text(field), change),
                None => break,
            }
        }
    }

    /// Selection of a control changed; write the selected item into the
    /// field its tag names.
    pub fn on_selection_changed(&mut self, control: &SelectionControl) -> Result<(), FormError> {
        let tag = control.tag();
        let item = control.selected_item();
        debug!(%tag, item = ?item, "selection changed");
        let result = self.apply_selection(tag, item);
        if let Err(e) = &result {
            warn!(%tag, error = %e, "selection not applied");
        }
        result
    }

    fn apply_selection(&mut self, tag: ActionTag, item: Option<&SelectedItem>) -> Result<(), FormError> {
        match tag {
            ActionTag::DepartureMonth => self.model.departure_date_mut().set_month(Self::text_of(tag, item)?),
            ActionTag::DepartureDay => self.model.departure_date_mut().set_day(Self::text_of(tag, item)?),
            ActionTag::DepartureYear => self.model.departure_date_mut().set_year(Self::text_of(tag, item)?),
            ActionTag::DepartureTime => self
                .model
                .departure_date_mut()
                .set_time_preference(Self::text_of(tag, item)?),
            ActionTag::ReturnMonth => self.model.return_date_mut().set_month(Self::text_of(tag, item)?),
            ActionTag::ReturnDay => self.model.return_date_mut().set_day(Self::text_of(tag, item)?),
            ActionTag::ReturnYear => self.model.return_date_mut().set_year(Self::text_of(tag, item)?),
            ActionTag::ReturnTime => self
                .model
                .return_date_mut()
                .set_time_preference(Self::text_of(tag, item)?),
            ActionTag::Passengers => self.model.set_passenger_count(Self::count_of(tag, item)?),
        }
        Ok(())
    }

    fn text_of(tag: ActionTag, item: Option<&SelectedItem>) -> Result<String, FormError> {
        match item {
            Some(SelectedItem::Text(s)) => Ok(s.clone()),
            other => Err(Self::mismatch(tag, other)),
        }
    }

    fn count_of(tag: ActionTag, item: Option<&SelectedItem>) -> Result<u8, FormError> {
        match item {
            Some(SelectedItem::Count(n)) => Ok(*n),
            other => Err(Self::mismatch(tag, other)),
        }
    }

    fn mismatch(tag: ActionTag, item: Option<&SelectedItem>) -> FormError {
        FormError::ItemMismatch {
            tag: tag.command(),
            item: item.map_or_else(|| "no selection".to_string(), |i| format!("{:?}", i)),
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = if ItineraryModel::is_submittable(&self.model) {
            SubmitOutcome::Accepted(self.model.to_string())
        } else {
            SubmitOutcome::Rejected(INVALID_FORM_MESSAGE)
        };
        info!(accepted = outcome.is_accepted(), "form submitted");
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}
