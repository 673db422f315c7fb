use crate::error::FormError;
use crate::form::binding::{ActionTag, SelectedItem, TextField};

/// What happened to a text control's content. Every change is reported,
/// one keystroke at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentChange {
    Inserted,
    Removed,
}

pub struct TextControl {
    field: TextField,
    text: String,
}

impl TextControl {
    pub fn new(field: TextField) -> TextControl {
        TextControl {
            field,
            text: String::new(),
        }
    }

    pub fn field(&self) -> TextField {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, c: char) -> ContentChange {
        self.text.push(c);
        ContentChange::Inserted
    }

    /// Removes the last character; `None` when already empty.
    pub fn remove_char(&mut self) -> Option<ContentChange> {
        self.text.pop().map(|_| ContentChange::Removed)
    }

    // initial fill, not a user edit
    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

pub struct SelectionControl {
    tag: ActionTag,
    items: Vec<SelectedItem>,
    selected: Option<usize>,
}

impl SelectionControl {
    pub fn new(tag: ActionTag) -> SelectionControl {
        SelectionControl {
            tag,
            items: vec![],
            selected: None,
        }
    }

    pub fn tag(&self) -> ActionTag {
        self.tag
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn selected_item(&self) -> Option<&SelectedItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn set_items(&mut self, items: Vec<SelectedItem>) {
        self.selected = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    /// Selects the option whose label is `label`.
    pub fn select(&mut self, label: &str) -> Result<&SelectedItem, FormError> {
        let idx = self
            .items
            .iter()
            .position(|item| item.to_string() == label)
            .ok_or_else(|| FormError::NotAnOption {
                tag: self.tag.command(),
                value: label.to_string(),
            })?;
        self.selected = Some(idx);
        Ok(&self.items[idx])
    }
}

/// The full set of controls making up the form.
pub struct FormView {
    texts: [TextControl; 2],
    selections: [SelectionControl; 9],
}

impl FormView {
    pub fn new() -> FormView {
        FormView {
            texts: TextField::ALL.map(TextControl::new),
            selections: ActionTag::ALL.map(SelectionControl::new),
        }
    }

    pub fn text(&self, field: TextField) -> &TextControl {
        match field {
            TextField::Origin => &self.texts[0],
            TextField::Destination => &self.texts[1],
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut TextControl {
        match field {
            TextField::Origin => &mut self.texts[0],
            TextField::Destination => &mut self.texts[1],
        }
    }

    pub fn selection(&self, tag: ActionTag) -> &SelectionControl {
        &self.selections[tag.index()]
    }

    pub fn selection_mut(&mut self, tag: ActionTag) -> &mut SelectionControl {
        &mut self.selections[tag.index()]
    }
}

impl Default for FormView {
    fn default() -> Self {
        FormView::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_edits_report_changes() {
        let mut control = TextControl::new(TextField::Origin);
        assert_eq!(None, control.remove_char());
        assert_eq!(ContentChange::Inserted, control.insert_char('B'));
        control.insert_char('o');
        assert_eq!(Some(ContentChange::Removed), control.remove_char());
        assert_eq!("B", control.text());
    }

    #[test]
    fn test_select_by_label() {
        let mut control = SelectionControl::new(ActionTag::Passengers);
        assert_eq!(None, control.selected_item());
        control.set_items((1..=3).map(SelectedItem::Count).collect());
        assert_eq!(Some(&SelectedItem::Count(1)), control.selected_item());

        assert_eq!(&SelectedItem::Count(3), control.select("3").unwrap());
        assert!(matches!(
            control.select("4"),
            Err(FormError::NotAnOption { tag: "passengers", .. })
        ));
        assert_eq!(Some(&SelectedItem::Count(3)), control.selected_item());
    }

    #[test]
    fn test_view_lookup() {
        let view = FormView::new();
        for tag in ActionTag::ALL {
            assert_eq!(tag, view.selection(tag).tag());
        }
        for field in TextField::ALL {
            assert_eq!(field, view.text(field).field());
        }
    }
}
