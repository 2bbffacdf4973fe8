// Event payload: CheckInNotesUpdatedV1. Overwrites the check-in notes of the current entry.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CheckInNotesUpdatedV1 {
    pub time_entry_id: String,
    pub check_in_notes: String,
}
