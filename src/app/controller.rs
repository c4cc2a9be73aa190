//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::app::events::{Notifier, NullNotifier};
use crate::protocol::writer::{self, StateSnapshot, TaskDescription};
use crate::replay::{NullResolver, NullSink, ReplayEngine, SystemClock};
use crate::shared::RenderScene;

/// Orchestriert Host-Intents und Commands auf den AppState.
///
/// Besitzt die injizierten Außen-Kanäle: den Notifier (Push an das Panel)
/// und den Replay-Engine mit seinen Capabilities. Kein Singleton: der
/// Host konstruiert und besitzt die Instanz explizit.
pub struct AppController {
    notifier: Box<dyn Notifier>,
    replay: ReplayEngine,
}

impl AppController {
    /// Erstellt einen Controller mit injiziertem Notifier und Replay-Engine.
    pub fn new(notifier: Box<dyn Notifier>, replay: ReplayEngine) -> Self {
        Self { notifier, replay }
    }

    /// Controller ohne Außen-Kanäle (Tests, Headless-Betrieb): Events
    /// werden verworfen, der Replay-Engine läuft gegen leere Capabilities.
    pub fn headless() -> Self {
        Self::new(
            Box::new(NullNotifier),
            ReplayEngine::new(
                Box::new(SystemClock::new()),
                Box::new(NullResolver),
                Box::new(NullSink),
                None,
            ),
        )
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let notifier = self.notifier.as_mut();

        match command {
            // === Modus ===
            AppCommand::SetMode { mode } => handlers::mode::set_mode(state, notifier, mode),

            // === Wegpunkte ===
            AppCommand::AddWaypointAt { pos } => {
                handlers::editing::add_waypoint(state, notifier, pos)
            }
            AppCommand::BeginWaypointDrag { pos } => {
                handlers::editing::begin_waypoint_drag(state, pos)
            }
            AppCommand::UpdateWaypointDrag { pos } => {
                handlers::editing::update_waypoint_drag(state, pos)
            }
            AppCommand::EndWaypointDrag => handlers::editing::end_waypoint_drag(state),

            // === Rechteck-Draw ===
            AppCommand::BeginRectDraw { pos } => handlers::editing::begin_rect_draw(state, pos),
            AppCommand::UpdateRectDraw { pos } => handlers::editing::update_rect_draw(state, pos),
            AppCommand::FinishRectDraw { pos } => {
                handlers::editing::finish_rect_draw(state, notifier, pos)
            }

            // === Pfad-Draw ===
            AppCommand::AppendPathPoint { pos } => {
                handlers::editing::append_path_point(state, pos)
            }
            AppCommand::FinalizePendingPath => {
                handlers::editing::finalize_pending_path(state, notifier)
            }

            // === Resize ===
            AppCommand::BeginResizeDrag { pos } => {
                handlers::editing::begin_resize_drag(state, pos)
            }
            AppCommand::UpdateResizeDrag { pos } => {
                handlers::editing::update_resize_drag(state, pos)
            }
            AppCommand::EndResizeDrag => handlers::editing::end_resize_drag(state),

            // === Bulk & Optionen ===
            AppCommand::ClearAll => handlers::editing::clear_all(state, notifier),
            AppCommand::SetViewport { size } => {
                state.scene.set_viewport(glam::Vec2::new(size[0], size[1]))
            }
            AppCommand::SetCorridorDefaultWidth { width_norm } => {
                handlers::editing::set_corridor_default_width(state, width_norm)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state, notifier),
            AppCommand::Redo => handlers::history::redo(state, notifier),

            // === Replay ===
            AppCommand::SetTrajectory { samples } => {
                handlers::replay::set_trajectory(&mut self.replay, notifier, samples)
            }
            AppCommand::StartReplay => handlers::replay::start(&mut self.replay),
            AppCommand::StopReplay => handlers::replay::stop(&mut self.replay, notifier),
            AppCommand::SeekReplay { time } => handlers::replay::seek(&mut self.replay, time),
            AppCommand::ReplayFrame => handlers::replay::frame(&mut self.replay, notifier),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state, self.replay.cursor_position())
    }

    /// Pull-Schnittstelle: vollständiger Zustands-Snapshot für das Panel.
    pub fn state_snapshot(&self, state: &AppState) -> StateSnapshot {
        writer::state_snapshot(state)
    }

    /// Task-Beschreibung für den externen Trajektorien-Service.
    pub fn task_description(&self, state: &AppState) -> TaskDescription {
        writer::task_description(state)
    }

    /// Zugriff auf den Replay-Engine (Diagnose, Tests).
    pub fn replay_engine(&self) -> &ReplayEngine {
        &self.replay
    }
}
