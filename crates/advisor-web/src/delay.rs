//! Browser timer for the report generator

use std::time::Duration;

use async_trait::async_trait;
use finance_advisor::Delay;
use futures::channel::oneshot;
use leptos::prelude::set_timeout;

/// `setTimeout` backed delay
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

#[async_trait]
impl Delay for BrowserDelay {
    async fn wait(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        // A dropped sender (torn-down page) just ends the wait
        let _ = rx.await;
    }
}
