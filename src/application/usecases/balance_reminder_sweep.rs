// Use case: balance_reminder_sweep.

use crate::application::context::AppContext;
use crate::application::usecases::trigger_webhook::TriggerWebhookUseCase;
use crate::domain::entities::event_kind::EventKind;
use crate::domain::value_objects::ids::BookingId;
use crate::domain::value_objects::timestamps::Timestamp;
use time::Duration;
use tracing::info;

/// Periodically re-enters the pipeline for bookings whose balance is
/// coming due. The sweep is an ordinary trigger point: it calls the same
/// contract as everything else and gets no special treatment inside the
/// pipeline. Re-running it produces new, additional delivery records.
pub struct BalanceReminderSweepUseCase;

#[derive(Debug)]
pub enum BalanceReminderSweepError {
    Storage(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceReminderSweepResult {
    pub scanned: usize,
    pub triggered: usize,
}

impl BalanceReminderSweepUseCase {
    /// Run one sweep pass: every deposit-paid booking whose clinic date
    /// falls inside the reminder window gets a `balance.due` trigger.
    pub async fn run_once(
        ctx: &AppContext,
        now: Timestamp,
    ) -> Result<BalanceReminderSweepResult, BalanceReminderSweepError> {
        // Step 1: Resolve the window [today, today + window_days].
        let from = now.date();
        let until = from + Duration::days(ctx.settings.balance_sweep.window_days);

        // Step 2: Find candidate bookings.
        let booking_ids = ctx
            .repos
            .booking
            .list_balance_due_ids(from, until)
            .await
            .map_err(|e| BalanceReminderSweepError::Storage(format!("{e:?}")))?;
        let scanned = booking_ids.len();

        // Step 3: Trigger each through the ordinary contract.
        let mut triggered = 0;
        for booking_id in booking_ids {
            let result =
                TriggerWebhookUseCase::execute(ctx, EventKind::BalanceDue, BookingId(booking_id))
                    .await;
            if result.matched > 0 {
                triggered += 1;
            }
        }

        info!(scanned, triggered, "balance reminder sweep pass finished");
        Ok(BalanceReminderSweepResult { scanned, triggered })
    }

    /// Run the sweep continuously at a fixed interval until shutdown.
    pub async fn run_loop(
        ctx: &AppContext,
        mut shutdown: tokio::sync::watch::Receiver<bool>,
    ) -> Result<(), BalanceReminderSweepError> {
        let sleep_duration =
            std::time::Duration::from_millis(ctx.settings.balance_sweep.poll_interval_ms);
        loop {
            if *shutdown.borrow() {
                break;
            }

            let _ = Self::run_once(ctx, Timestamp::now_utc()).await?;

            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        break;
                    }
                }
                _ = tokio::time::sleep(sleep_duration) => {}
            }
        }

        Ok(())
    }
}
