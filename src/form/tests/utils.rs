use crate::form::binding::{ActionTag, TextField};
use crate::form::controller::FormController;
use crate::form::view::FormView;
use crate::itinerary::ItineraryModel;
use crate::options::OptionSet;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn setup() -> (FormView, FormController) {
    let mut view = FormView::new();
    let controller = FormController::new(ItineraryModel::new(), &mut view, &OptionSet::default())
        .expect("default options cover the default model");
    (view, controller)
}

pub fn select(view: &mut FormView, controller: &mut FormController, tag: ActionTag, label: &str) {
    view.selection_mut(tag).select(label).unwrap();
    controller.on_selection_changed(view.selection(tag)).unwrap();
}

pub fn fill_date(
    view: &mut FormView,
    controller: &mut FormController,
    tags: [ActionTag; 4],
    values: [&str; 4],
) {
    for (tag, value) in tags.into_iter().zip(values) {
        select(view, controller, tag, value);
    }
}

pub const DEPARTURE: [ActionTag; 4] = [
    ActionTag::DepartureMonth,
    ActionTag::DepartureDay,
    ActionTag::DepartureYear,
    ActionTag::DepartureTime,
];

pub const RETURN: [ActionTag; 4] = [
    ActionTag::ReturnMonth,
    ActionTag::ReturnDay,
    ActionTag::ReturnYear,
    ActionTag::ReturnTime,
];

/// Picks any entry of `list`, placeholders included.
pub fn arb_option(list: Vec<String>) -> impl Strategy<Value = String> {
    proptest::sample::select(list)
}

pub fn arb_location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t\n".to_string()),
        Just("Boston".to_string()),
        Just(" Paris ".to_string()),
        "[a-zA-Z ]{0,12}",
    ]
}
