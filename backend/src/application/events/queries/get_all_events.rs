use crate::application::error::AppError;
use crate::application::ports::EventRepository;
use crate::application::views::{sort_by_start_time, EventView};

/// Every event, earliest start first. Events starting at the same instant
/// keep the order in which they were created.
pub async fn execute<E: EventRepository + ?Sized>(events: &E) -> Result<Vec<EventView>, AppError> {
    let mut all = events.list_all().await?;
    sort_by_start_time(&mut all);
    Ok(all.into_iter().map(EventView::from).collect())
}
