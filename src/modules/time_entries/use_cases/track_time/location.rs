// Geolocation gate in front of clock-in.
//
// Boundaries
// - The state machine has no location policy. The gate runs before a ClockIn is ever decided.

use crate::modules::time_entries::core::state::CurrentEntry;
use crate::modules::time_entries::use_cases::clock_in::command::ClockInRequest;
use crate::modules::time_entries::use_cases::track_time::handler::{
    ApplicationError, TimeEntrySession,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "lowercase")]
pub enum LocationPermission {
    Granted,
    Denied,
    #[default]
    Unknown,
}

pub async fn clock_in_with_location(
    session: &TimeEntrySession,
    require_location: bool,
    permission: LocationPermission,
    request: ClockInRequest,
) -> Result<CurrentEntry, ApplicationError> {
    let view = session.clock_view();
    if require_location && permission != LocationPermission::Granted {
        view.set_location_denied(true);
        tracing::info!(user_id = %session.user_id(), ?permission, "clock-in refused without location");
        return Err(ApplicationError::LocationRequired);
    }
    view.set_location_denied(permission == LocationPermission::Denied);
    session.clock_in(request).await
}
