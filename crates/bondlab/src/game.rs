//! Game controller: thin routing layer.
//!
//! Sends pointer input to the HUD and the drag controller, runs checks,
//! and syncs the frame's draw list.

use bondlab_core::{FrameContext, Game, GameConfig, InputEvent, InputQueue};
use glam::Vec2;

use crate::elements::AtomPalette;
use crate::hud::{ButtonId, ControlPanel};
use crate::interaction::{DragController, DropOutcome, PickOutcome};
use crate::layout;
use crate::levels::Levels;
use crate::renderer::SceneRenderer;
use crate::session::Session;
use crate::validator::{self, Strategy};
use crate::workspace::Workspace;

/// The molecule builder game.
pub struct MoleculeBuilder {
    workspace: Workspace,
    palette: AtomPalette,
    slots: Vec<bondlab_core::Rect>,
    panel: ControlPanel,
    levels: Levels,
    session: Session,
    drag: DragController,
    renderer: SceneRenderer,
    finished: bool,
}

impl MoleculeBuilder {
    /// Build with the bundled level set.
    pub fn new() -> Self {
        Self::with_levels(Levels::bundled())
    }

    pub fn with_levels(levels: Levels) -> Self {
        let palette = AtomPalette::load().expect("embedded atom palette must parse");
        let slots = layout::palette_slots(palette.len());
        Self {
            workspace: Workspace::new(),
            palette,
            slots,
            panel: ControlPanel::new(),
            levels,
            session: Session::new(),
            drag: DragController::new(),
            renderer: SceneRenderer,
            finished: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn current_level(&self) -> Option<&crate::levels::Level> {
        self.levels.get(self.session.current_level)
    }

    fn handle_pointer_down(&mut self, pos: Vec2) {
        if let Some(button) = self.panel.hit_test(pos, self.session.level_complete) {
            self.handle_button(button);
            return;
        }
        match self.drag.on_pointer_down(pos, &self.slots, &self.palette, &mut self.workspace) {
            PickOutcome::PickedNew { atom } => {
                if let Some(a) = self.workspace.atom(atom) {
                    log::info!("Created new {} atom", a.symbol);
                }
            }
            PickOutcome::PickedExisting { atom } => {
                if let Some(a) = self.workspace.atom(atom) {
                    log::info!("Started dragging {} atom", a.symbol);
                }
            }
            PickOutcome::None => {}
        }
    }

    fn handle_pointer_up(&mut self) {
        match self.drag.on_pointer_up(layout::BENCH, &mut self.workspace) {
            DropOutcome::Placed { atom, bonded } => {
                let symbol = self
                    .workspace
                    .atom(atom)
                    .map(|a| a.symbol.clone())
                    .unwrap_or_default();
                match bonded.and_then(|id| self.workspace.atom(id)) {
                    Some(partner) => {
                        log::info!("Placed {} and bonded it to {}", symbol, partner.symbol)
                    }
                    None => log::info!("Placed {} on the bench", symbol),
                }
            }
            DropOutcome::Removed { atom } => {
                log::info!("Removed atom {:?} from the bench", atom)
            }
            DropOutcome::Discarded { atom } => {
                log::info!("Discarded atom {:?}", atom)
            }
            DropOutcome::None => {}
        }
    }

    fn handle_button(&mut self, id: ButtonId) {
        match id {
            ButtonId::Reset => self.reset_bench(),
            ButtonId::Check => self.run_check(),
            ButtonId::Hint => {
                if let Some(level) = self.levels.get(self.session.current_level) {
                    self.session.show_hint(level);
                    log::info!("Showing hint: {}", self.session.hint);
                }
            }
            ButtonId::NextLevel => self.next_level(),
        }
    }

    fn reset_bench(&mut self) {
        self.workspace.clear();
        self.drag.reset();
        self.session.reset_level();
        log::info!("Bench reset");
    }

    fn run_check(&mut self) {
        let Some(level) = self.levels.get(self.session.current_level) else {
            return;
        };
        let strategy = Strategy::for_level(level);
        let report = validator::check(&self.workspace, level, strategy);
        log::info!("Check ({:?}): {}", strategy, report.message);
        self.session.apply_report(&report);
    }

    fn next_level(&mut self) {
        if !self.session.level_complete {
            return;
        }
        self.workspace.clear();
        self.drag.reset();
        if self.session.advance_level(self.levels.len()) {
            log::info!("Moving to level {}", self.session.current_level + 1);
        } else {
            log::info!("All levels complete");
            self.finished = true;
        }
    }
}

impl Game for MoleculeBuilder {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: layout::WORLD_W,
            world_height: layout::WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut FrameContext) {
        log::info!("Molecule builder ready: {} levels", self.levels.len());
    }

    fn update(&mut self, ctx: &mut FrameContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => self.handle_pointer_down(Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => {
                    self.drag.on_pointer_move(Vec2::new(x, y), &mut self.workspace)
                }
                InputEvent::PointerUp { .. } => self.handle_pointer_up(),
                InputEvent::Quit => ctx.request_quit(),
            }
        }

        if self.finished {
            ctx.request_quit();
        }

        self.renderer.sync(
            ctx,
            &self.workspace,
            &self.palette,
            &self.slots,
            &self.panel,
            &self.session,
            self.levels.get(self.session.current_level),
            self.drag.dragged(),
        );
    }
}

impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CHECK_REWARD;

    fn frame(game: &mut MoleculeBuilder, events: &[InputEvent]) -> FrameContext {
        let mut ctx = FrameContext::new();
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        game.update(&mut ctx, &input);
        ctx
    }

    fn click(game: &mut MoleculeBuilder, x: f32, y: f32) {
        frame(game, &[InputEvent::PointerDown { x, y }, InputEvent::PointerUp { x, y }]);
    }

    fn drag(game: &mut MoleculeBuilder, from: (f32, f32), to: (f32, f32)) {
        frame(
            game,
            &[
                InputEvent::PointerDown { x: from.0, y: from.1 },
                InputEvent::PointerMove { x: to.0, y: to.1 },
                InputEvent::PointerUp { x: to.0, y: to.1 },
            ],
        );
    }

    #[test]
    fn palette_drag_places_an_atom() {
        let mut game = MoleculeBuilder::new();
        // Slot 0 (hydrogen) at (60, 120), dropped mid-bench.
        drag(&mut game, (60.0, 120.0), (300.0, 300.0));

        assert_eq!(game.workspace().placed_symbols(), ["H"]);
        let atom = game.workspace().placed().next().unwrap();
        assert_eq!(atom.pos, Vec2::new(300.0, 300.0));
        assert!(atom.neighbors.is_empty());
    }

    #[test]
    fn drop_outside_the_bench_leaves_nothing() {
        let mut game = MoleculeBuilder::new();
        drag(&mut game, (60.0, 120.0), (100.0, 600.0));
        assert_eq!(game.workspace().placed_count(), 0);
        assert_eq!(game.workspace().atom_count(), 0);
    }

    #[test]
    fn building_water_and_checking_scores() {
        let mut game = MoleculeBuilder::new();
        // Oxygen from slot 1, then two hydrogens dropped beside it so
        // they auto-bond on release.
        drag(&mut game, (60.0, 220.0), (500.0, 300.0));
        drag(&mut game, (60.0, 120.0), (530.0, 300.0));
        drag(&mut game, (60.0, 120.0), (470.0, 300.0));
        assert_eq!(game.workspace().placed_count(), 3);

        // Check button.
        click(&mut game, 300.0, 720.0);
        assert!(game.session().level_complete);
        assert_eq!(game.session().score, CHECK_REWARD);
        assert!(game.session().message.contains("Correct"));
    }

    #[test]
    fn rechecking_a_solved_level_pays_again() {
        let mut game = MoleculeBuilder::new();
        drag(&mut game, (60.0, 220.0), (500.0, 300.0));
        drag(&mut game, (60.0, 120.0), (530.0, 300.0));
        drag(&mut game, (60.0, 120.0), (470.0, 300.0));

        click(&mut game, 300.0, 720.0);
        assert_eq!(game.session().score, CHECK_REWARD);

        click(&mut game, 300.0, 720.0);
        assert_eq!(game.session().score, 2 * CHECK_REWARD);
        assert!(game.session().level_complete);
    }

    #[test]
    fn wrong_composition_is_rejected() {
        let mut game = MoleculeBuilder::new();
        drag(&mut game, (60.0, 120.0), (300.0, 300.0));
        click(&mut game, 300.0, 720.0);
        assert!(!game.session().level_complete);
        assert_eq!(game.session().score, 0);
        assert!(game.session().message.contains("Incorrect"));
    }

    #[test]
    fn unbonded_water_fails_the_structural_check() {
        let mut game = MoleculeBuilder::new();
        // Right atoms, parked far apart so no bonds form.
        drag(&mut game, (60.0, 220.0), (300.0, 200.0));
        drag(&mut game, (60.0, 120.0), (600.0, 200.0));
        drag(&mut game, (60.0, 120.0), (450.0, 500.0));
        click(&mut game, 300.0, 720.0);
        assert!(!game.session().level_complete);
        assert!(!game.session().message.contains("Correct"));
    }

    #[test]
    fn reset_clears_the_bench_but_keeps_score() {
        let mut game = MoleculeBuilder::new();
        drag(&mut game, (60.0, 220.0), (500.0, 300.0));
        drag(&mut game, (60.0, 120.0), (530.0, 300.0));
        drag(&mut game, (60.0, 120.0), (470.0, 300.0));
        click(&mut game, 300.0, 720.0);
        assert_eq!(game.session().score, CHECK_REWARD);

        // Reset button.
        click(&mut game, 60.0, 710.0);
        assert_eq!(game.workspace().placed_count(), 0);
        assert!(game.session().message.is_empty());
        assert!(game.session().hint.is_empty());
        assert!(!game.session().level_complete);
        assert_eq!(game.session().score, CHECK_REWARD);
    }

    #[test]
    fn hint_button_reveals_the_target() {
        let mut game = MoleculeBuilder::new();
        click(&mut game, 660.0, 710.0);
        assert!(game.session().hint.contains("Water"));
    }

    #[test]
    fn next_level_advances_and_clears_the_bench() {
        let mut game = MoleculeBuilder::new();
        drag(&mut game, (60.0, 220.0), (500.0, 300.0));
        drag(&mut game, (60.0, 120.0), (530.0, 300.0));
        drag(&mut game, (60.0, 120.0), (470.0, 300.0));
        click(&mut game, 300.0, 720.0);
        assert!(game.session().level_complete);

        click(&mut game, 460.0, 710.0);
        assert_eq!(game.session().current_level, 1);
        assert_eq!(game.current_level().unwrap().name, "Carbon Dioxide");
        assert_eq!(game.workspace().placed_count(), 0);
        assert!(!game.session().level_complete);
    }

    #[test]
    fn next_level_is_inert_before_completion() {
        let mut game = MoleculeBuilder::new();
        click(&mut game, 460.0, 710.0);
        assert_eq!(game.session().current_level, 0);
    }

    #[test]
    fn finishing_the_last_level_requests_quit() {
        let mut game = MoleculeBuilder::with_levels(Levels::builtin());
        // Solve water.
        drag(&mut game, (60.0, 220.0), (500.0, 300.0));
        drag(&mut game, (60.0, 120.0), (530.0, 300.0));
        drag(&mut game, (60.0, 120.0), (470.0, 300.0));
        click(&mut game, 300.0, 720.0);
        click(&mut game, 460.0, 710.0);

        // Solve carbon dioxide: C from slot 2, two O from slot 1.
        drag(&mut game, (60.0, 320.0), (500.0, 300.0));
        drag(&mut game, (60.0, 220.0), (530.0, 300.0));
        drag(&mut game, (60.0, 220.0), (470.0, 300.0));
        click(&mut game, 300.0, 720.0);
        assert!(game.session().level_complete);

        click(&mut game, 460.0, 710.0);
        assert!(game.session().message.contains("Congratulations"));
        let ctx = frame(&mut game, &[]);
        assert!(ctx.quit_requested());
    }

    #[test]
    fn quit_event_is_forwarded() {
        let mut game = MoleculeBuilder::new();
        let ctx = frame(&mut game, &[InputEvent::Quit]);
        assert!(ctx.quit_requested());
    }
}
