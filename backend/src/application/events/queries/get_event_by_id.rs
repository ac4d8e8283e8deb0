use crate::application::error::AppError;
use crate::application::ports::EventRepository;
use crate::application::views::EventView;
use crate::domain::EventId;

/// `Ok(None)` when no such event exists; absence is not a failure here.
pub async fn execute<E: EventRepository + ?Sized>(
    events: &E,
    id: &EventId,
) -> Result<Option<EventView>, AppError> {
    Ok(events.find_by_id(id).await?.map(EventView::from))
}
