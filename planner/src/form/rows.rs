use dto::plan::AvailabilityDto;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowField {
    Date,
    Start,
    End,
}

impl RowField {
    pub fn name(self) -> &'static str {
        match self {
            RowField::Date => "date",
            RowField::Start => "start",
            RowField::End => "end",
        }
    }
}

/// One date + time window as typed by the user. `key` only identifies the row
/// while it is on screen and never leaves the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityRow {
    pub key: Uuid,
    pub date: String,
    pub start: String,
    pub end: String,
}

impl AvailabilityRow {
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.start.is_empty() && !self.end.is_empty()
    }

    pub fn get(&self, field: RowField) -> &str {
        match field {
            RowField::Date => &self.date,
            RowField::Start => &self.start,
            RowField::End => &self.end,
        }
    }

    fn field_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::Date => &mut self.date,
            RowField::Start => &mut self.start,
            RowField::End => &mut self.end,
        }
    }

    /// Payload form of the row, `None` while any field is still empty.
    pub fn to_dto(&self) -> Option<AvailabilityDto> {
        self.is_complete().then(|| AvailabilityDto {
            date: self.date.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<AvailabilityRow>,
}

impl RowList {
    /// A list holding a single empty row, which is what the page starts with.
    pub fn new() -> Self {
        let mut list = RowList { rows: vec![] };
        list.push(Self::create_row());
        list
    }

    pub fn create_row() -> AvailabilityRow {
        AvailabilityRow {
            key: Uuid::new_v4(),
            date: String::new(),
            start: String::new(),
            end: String::new(),
        }
    }

    pub fn push(&mut self, row: AvailabilityRow) {
        self.rows.push(row);
    }

    pub fn add_row(&mut self) {
        self.push(Self::create_row());
    }

    pub fn remove(&mut self, key: Uuid) {
        self.rows.retain(|row| row.key != key);
    }

    pub fn set_field(&mut self, key: Uuid, field: RowField, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            *row.field_mut(field) = value;
        }
    }

    pub fn reset(&mut self) {
        *self = RowList::new();
    }

    pub fn rows(&self) -> &[AvailabilityRow] {
        &self.rows
    }

    pub fn keys(&self) -> Vec<Uuid> {
        self.rows.iter().map(|row| row.key).collect()
    }

    pub fn get(&self, key: Uuid) -> Option<&AvailabilityRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fully filled rows in visual order; partial rows are skipped.
    pub fn complete(&self) -> Vec<AvailabilityDto> {
        self.rows.iter().filter_map(AvailabilityRow::to_dto).collect()
    }
}

impl Default for RowList {
    fn default() -> Self {
        RowList::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(list: &mut RowList, date: &str, start: &str, end: &str) -> Uuid {
        let row = RowList::create_row();
        let key = row.key;
        list.push(row);
        list.set_field(key, RowField::Date, date.to_string());
        list.set_field(key, RowField::Start, start.to_string());
        list.set_field(key, RowField::End, end.to_string());
        key
    }

    #[test]
    fn new_list_holds_one_empty_row() {
        let list = RowList::new();

        assert_eq!(list.len(), 1);
        assert!(!list.rows()[0].is_complete());
        assert!(list.complete().is_empty());
    }

    #[test]
    fn created_rows_are_empty_and_unattached() {
        let list = RowList::new();
        let row = RowList::create_row();

        assert_eq!(row.get(RowField::Date), "");
        assert_eq!(row.get(RowField::Start), "");
        assert_eq!(row.get(RowField::End), "");
        assert!(list.get(row.key).is_none());
    }

    #[test]
    fn deleting_a_row_leaves_the_others_untouched() {
        let mut list = RowList::new();
        list.remove(list.keys()[0]);
        let first = filled(&mut list, "2024-05-01", "18:00", "20:00");
        let second = filled(&mut list, "2024-05-02", "10:00", "12:00");
        let third = filled(&mut list, "2024-05-03", "09:00", "11:00");
        let before = list.clone();

        list.remove(second);

        assert_eq!(list.keys(), vec![first, third]);
        assert_eq!(list.get(first), before.get(first));
        assert_eq!(list.get(third), before.get(third));
    }

    #[test]
    fn deleting_the_last_row_leaves_zero_rows() {
        let mut list = RowList::new();
        list.remove(list.keys()[0]);

        assert!(list.is_empty());
        assert!(list.complete().is_empty());
    }

    #[test]
    fn removing_an_unknown_key_does_nothing() {
        let mut list = RowList::new();
        let before = list.clone();

        list.remove(Uuid::new_v4());

        assert_eq!(list, before);
    }

    #[test]
    fn partial_rows_are_dropped_from_complete() {
        let mut list = RowList::new();
        let partial = list.keys()[0];
        list.set_field(partial, RowField::Date, String::from("2024-05-02"));
        filled(&mut list, "2024-05-01", "18:00", "20:00");

        assert_eq!(
            list.complete(),
            vec![AvailabilityDto {
                date: String::from("2024-05-01"),
                start: String::from("18:00"),
                end: String::from("20:00"),
            }]
        );
    }

    #[test]
    fn complete_keeps_visual_order() {
        let mut list = RowList::new();
        filled(&mut list, "2024-05-03", "09:00", "10:00");
        filled(&mut list, "2024-05-01", "18:00", "20:00");

        let dates = list
            .complete()
            .into_iter()
            .map(|a| a.date)
            .collect::<Vec<_>>();

        assert_eq!(dates, vec!["2024-05-03", "2024-05-01"]);
    }

    #[test]
    fn reset_discards_all_rows() {
        let mut list = RowList::new();
        filled(&mut list, "2024-05-01", "18:00", "20:00");
        list.add_row();
        let old_keys = list.keys();

        list.reset();

        assert_eq!(list.len(), 1);
        assert!(!list.rows()[0].is_complete());
        assert!(!old_keys.contains(&list.keys()[0]));
    }
}
