use crate::error::FormError;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// Identity carried by each free-text control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    Origin,
    Destination,
}

impl TextField {
    pub const ALL: [TextField; 2] = [TextField::Origin, TextField::Destination];

    pub fn name(self) -> &'static str {
        match self {
            TextField::Origin => "origin",
            TextField::Destination => "destination",
        }
    }
}

impl FromStr for TextField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" | "from" => Ok(TextField::Origin),
            "destination" | "to" => Ok(TextField::Destination),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Action command carried by each selection control, one per bound field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionTag {
    DepartureMonth,
    DepartureDay,
    DepartureYear,
    DepartureTime,
    ReturnMonth,
    ReturnDay,
    ReturnYear,
    ReturnTime,
    Passengers,
}

impl ActionTag {
    pub const ALL: [ActionTag; 9] = [
        ActionTag::DepartureMonth,
        ActionTag::DepartureDay,
        ActionTag::DepartureYear,
        ActionTag::DepartureTime,
        ActionTag::ReturnMonth,
        ActionTag::ReturnDay,
        ActionTag::ReturnYear,
        ActionTag::ReturnTime,
        ActionTag::Passengers,
    ];

    pub fn command(self) -> &'static str {
        match self {
            ActionTag::DepartureMonth => "departure-month",
            ActionTag::DepartureDay => "departure-day",
            ActionTag::DepartureYear => "departure-year",
            ActionTag::DepartureTime => "departure-time",
            ActionTag::ReturnMonth => "return-month",
            ActionTag::ReturnDay => "return-day",
            ActionTag::ReturnYear => "return-year",
            ActionTag::ReturnTime => "return-time",
            ActionTag::Passengers => "passengers",
        }
    }

    // position in ALL
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ActionTag {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionTag::ALL
            .into_iter()
            .find(|tag| tag.command() == s)
            .ok_or_else(|| FormError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// An entry of a selection control's option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectedItem {
    Text(String),
    Count(u8),
}

impl fmt::Display for SelectedItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectedItem::Text(s) => write!(f, "{}", s),
            SelectedItem::Count(n) => write!(f, "{}", n),
        }
    }
}
