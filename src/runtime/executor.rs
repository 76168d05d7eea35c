//! Conversation runtime executor

use super::traits::Console;
use crate::booking::BookingDetails;
use crate::phrases;
use crate::state_machine::{
    transition, DialogueContext, DialogueState, Effect, EndReason, Event, TransitionError,
};
use rand::Rng;
use thiserror::Error;
use tracing::Instrument;

/// Errors that stop a conversation before it reaches an ending
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed while in state {state}")]
    InputClosed { state: &'static str },
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Drives one conversation from greeting to an ending
///
/// A runtime is good for exactly one conversation; `run` consumes it.
pub struct DialogueRuntime<C, R>
where
    C: Console,
    R: Rng + Send,
{
    context: DialogueContext,
    state: DialogueState,
    booking: BookingDetails,
    console: C,
    /// Source for greeting selection
    rng: R,
}

impl<C, R> DialogueRuntime<C, R>
where
    C: Console,
    R: Rng + Send,
{
    pub fn new(context: DialogueContext, console: C, rng: R) -> Self {
        Self {
            context,
            state: DialogueState::default(),
            booking: BookingDetails::default(),
            console,
            rng,
        }
    }

    pub async fn run(mut self) -> Result<EndReason, RuntimeError> {
        let span = tracing::info_span!(
            "conversation",
            conv_id = %self.context.conversation_id
        );

        async move {
            tracing::info!(exit_policy = ?self.context.exit_policy, "Starting conversation");
            let result = self.drive().await;

            let booking = serde_json::to_string(&self.booking).unwrap_or_default();
            match &result {
                Ok(reason) => tracing::info!(
                    outcome = ?reason,
                    complete = self.booking.is_complete(),
                    %booking,
                    "Conversation ended"
                ),
                Err(e) => {
                    tracing::warn!(error = %e, state = self.state.label(), %booking, "Conversation stopped");
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Run the conversation loop until an ending, one input line per turn
    async fn drive(&mut self) -> Result<EndReason, RuntimeError> {
        self.process_event(Event::Start).await?;

        // Process input in a loop - no recursion
        loop {
            if let DialogueState::Ended { reason } = &self.state {
                return Ok(*reason);
            }

            let Some(line) = self.console.read_line().await? else {
                return Err(RuntimeError::InputClosed {
                    state: self.state.label(),
                });
            };
            self.process_event(Event::user_input(line)).await?;
        }
    }

    async fn process_event(&mut self, event: Event) -> Result<(), RuntimeError> {
        // Effects can generate follow-up events (quote requests), so work
        // through them as a queue
        let mut events_to_process = vec![event];

        while let Some(current_event) = events_to_process.pop() {
            let result = transition(&self.state, &self.booking, &self.context, current_event)?;

            if result.new_state != self.state {
                tracing::debug!(
                    from = self.state.label(),
                    to = result.new_state.label(),
                    "State transition"
                );
            }
            self.state = result.new_state;
            self.booking = result.booking;

            for effect in result.effects {
                if let Some(generated_event) = self.execute_effect(effect).await? {
                    events_to_process.push(generated_event);
                }
            }
        }

        Ok(())
    }

    /// Execute an effect and optionally return a generated event
    async fn execute_effect(&mut self, effect: Effect) -> Result<Option<Event>, RuntimeError> {
        match effect {
            Effect::Greet => {
                let greeting = phrases::greeting(&mut self.rng);
                self.console.write_line(greeting).await?;
                Ok(None)
            }

            Effect::Say { text } | Effect::Prompt { text } => {
                self.console.write_line(&text).await?;
                Ok(None)
            }

            Effect::Reject { error } => {
                tracing::debug!(state = self.state.label(), ?error, "Input rejected");
                self.console.write_line(&error.to_string()).await?;
                Ok(None)
            }

            Effect::RequestQuote => Ok(Some(Event::QuoteRequested)),
        }
    }
}
