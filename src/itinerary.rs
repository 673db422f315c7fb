use crate::options::DEFAULT_PASSENGERS;
use crate::travel_date::TravelDate;
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq)]
pub struct ItineraryModel {
    origin: String,
    destination: String,
    departure_date: TravelDate,
    return_date: TravelDate,
    passenger_count: u8,
}

/// One labelled line of the `show` table.
#[derive(Debug, PartialEq, Tabled)]
pub struct FieldRow {
    pub field: &'static str,
    pub value: String,
}

impl ItineraryModel {
    pub fn new() -> ItineraryModel {
        ItineraryModel {
            origin: String::new(),
            destination: String::new(),
            departure_date: TravelDate::new(),
            return_date: TravelDate::new(),
            passenger_count: DEFAULT_PASSENGERS,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn passenger_count(&self) -> u8 {
        self.passenger_count
    }

    pub fn set_passenger_count(&mut self, passenger_count: u8) {
        self.passenger_count = passenger_count;
    }

    pub fn departure_date(&self) -> &TravelDate {
        &self.departure_date
    }

    pub fn departure_date_mut(&mut self) -> &mut TravelDate {
        &mut self.departure_date
    }

    pub fn return_date(&self) -> &TravelDate {
        &self.return_date
    }

    pub fn return_date_mut(&mut self) -> &mut TravelDate {
        &mut self.return_date
    }

    /// Origin and destination must hold something besides whitespace and
    /// both dates must be off their placeholders. Passenger count is not
    /// looked at.
    pub fn is_submittable(model: &ItineraryModel) -> bool {
        Self::has_locations(model) && Self::has_dates(model)
    }

    fn has_locations(model: &ItineraryModel) -> bool {
        !model.origin.trim().is_empty() && !model.destination.trim().is_empty()
    }

    fn has_dates(model: &ItineraryModel) -> bool {
        model.departure_date.is_valid() && model.return_date.is_valid()
    }

    pub fn rows(&self) -> Vec<FieldRow> {
        vec![
            FieldRow { field: "From", value: self.origin.clone() },
            FieldRow { field: "To", value: self.destination.clone() },
            FieldRow { field: "Departing", value: self.departure_date.to_string() },
            FieldRow { field: "Returning", value: self.return_date.to_string() },
            FieldRow { field: "Passengers", value: self.passenger_count.to_string() },
        ]
    }
}

impl Default for ItineraryModel {
    fn default() -> Self {
        ItineraryModel::new()
    }
}

impl fmt::Display for ItineraryModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: {}\nTo: {}\nDeparting: {}\nReturning: {}\nPassengers: {}",
            self.origin, self.destination, self.departure_date, self.return_date, self.passenger_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(model: &mut ItineraryModel) {
        model.set_origin("Boston");
        model.set_destination("Paris");
        for date in [&mut model.departure_date, &mut model.return_date] {
            date.set_month("March");
            date.set_day("5");
            date.set_year("2008");
        }
    }

    #[test]
    fn test_fresh_model_not_submittable() {
        let model = ItineraryModel::new();
        assert!(!ItineraryModel::is_submittable(&model));
        assert_eq!("", model.origin());
        assert_eq!(1, model.passenger_count());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut model = ItineraryModel::new();
        fill(&mut model);
        assert!(ItineraryModel::is_submittable(&model));

        model.set_origin("  \t ");
        assert!(!ItineraryModel::is_submittable(&model));
        assert_eq!("  \t ", model.origin());

        model.set_origin(" Boston ");
        model.set_destination("\n");
        assert!(!ItineraryModel::is_submittable(&model));
        assert_eq!(" Boston ", model.origin());
    }

    #[test]
    fn test_passengers_never_checked() {
        let mut model = ItineraryModel::new();
        fill(&mut model);
        model.set_passenger_count(0);
        assert!(ItineraryModel::is_submittable(&model));
    }

    #[test]
    fn test_return_date_checked() {
        let mut model = ItineraryModel::new();
        fill(&mut model);
        model.return_date_mut().set_year(crate::options::SENTINEL_YEAR);
        assert!(!ItineraryModel::is_submittable(&model));
    }

    #[test]
    fn test_rows_follow_display() {
        let mut model = ItineraryModel::new();
        fill(&mut model);
        let rows = model.rows();
        assert_eq!(5, rows.len());
        let joined = rows
            .iter()
            .map(|r| format!("{}: {}", r.field, r.value))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(model.to_string(), joined);
    }
}
