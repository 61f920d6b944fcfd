//! Start a pagination session and hand it to its own task.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error};
use twilight_model::id::{Id, marker::MessageMarker};

use super::router::SessionRouter;
use super::session::PaginationSession;
use super::transport::SlotTransport;

/// A session running on its own task.
pub struct LaunchedSession {
    /// Message carrying the navigation controls.
    pub control_message: Id<MessageMarker>,
    /// Event loop task; finishes once the session terminates.
    pub task: JoinHandle<()>,
}

/// Publish the first page, register the control message, attach controls and
/// spawn the event loop.
///
/// Failures before the loop starts propagate to the caller. Failures inside the
/// loop are logged by the task and end the session.
pub async fn launch_session<T>(
    router: &SessionRouter,
    mut session: PaginationSession<T>,
    idle_timeout: Option<Duration>,
) -> anyhow::Result<LaunchedSession>
where
    T: SlotTransport + 'static,
{
    let control_message = session.open().await?;
    let inputs = router.register(control_message).await;

    if let Err(source) = session.attach_controls().await {
        router.remove(control_message).await;
        return Err(source);
    }

    let router = router.clone();
    let task = tokio::spawn(async move {
        match session.run(inputs, idle_timeout).await {
            Ok(reason) => debug!(
                ?reason,
                message_id = control_message.get(),
                "pagination session finished"
            ),
            Err(source) => error!(
                ?source,
                message_id = control_message.get(),
                "pagination session failed"
            ),
        }
        router.remove(control_message).await;
    });

    Ok(LaunchedSession {
        control_message,
        task,
    })
}
