use anyhow::Result;
use log::{debug, error, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::FrameClock;
use engine::input::{Action, GlobalAction, InputEvent, InputManager};
use engine::render::{BoxMode, RenderConfig, TraceCanvas};
use engine::world::{EdgeMode, SimulationConfig};
use game::{Bout, HitEvent, Outcome, Player};

/// Everything the event loop drives
struct App {
    bout: Bout,
    clock: FrameClock,
    input: InputManager,
    sim: SimulationConfig,
    render: RenderConfig,
    canvas: TraceCanvas,
    winner_announced: bool,
}

impl App {
    fn new() -> Result<Self> {
        let app = Self {
            bout: Bout::new()?,
            clock: FrameClock::new(),
            input: InputManager::new(Player::ALL.len()),
            sim: SimulationConfig::with_edge_mode(EdgeMode::BoxWorld),
            render: RenderConfig::default(),
            canvas: TraceCanvas::new(),
            winner_announced: false,
        };
        app.log_bindings();
        Ok(app)
    }

    fn log_bindings(&self) {
        for player in Player::ALL {
            let Some(config) = self.input.config().get_config(player.index()) else {
                continue;
            };
            for action in Action::ALL {
                debug!("{:?} {:?}: {:?}", player, action, config.get_sources(action));
            }
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Player(index, action) => {
                if let Some(&player) = Player::ALL.get(index) {
                    self.bout.command(player, action.into());
                }
            }
            InputEvent::Global(action) => self.apply_global(action),
        }
    }

    fn apply_global(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::TogglePause => self.clock.toggle_pause(),
            GlobalAction::HideBoxes => self.render.box_mode = BoxMode::None,
            GlobalAction::ShowAbsoluteBoxes => self.render.box_mode = BoxMode::Absolute,
            GlobalAction::ShowRelativeBoxes => self.render.box_mode = BoxMode::Relative,
            GlobalAction::ToggleReferenceFrame => {
                self.render.draw_reference_frame = !self.render.draw_reference_frame
            }
            GlobalAction::BoxWorld => self.sim.edge_mode = EdgeMode::BoxWorld,
            GlobalAction::CylinderWorld => self.sim.edge_mode = EdgeMode::CylinderWorld,
            GlobalAction::Unbounded => self.sim.edge_mode = EdgeMode::Unbounded,
            GlobalAction::ToggleEasing => {
                let easing = self.bout.easing().toggled();
                if let Err(e) = self.bout.set_easing(easing) {
                    error!("Failed to rebuild clips: {}", e);
                }
            }
        }
        info!(
            "{:?}: boxes {:?}, reference frame {}, edges {:?}, easing {:?}",
            action,
            self.render.box_mode,
            self.render.draw_reference_frame,
            self.sim.edge_mode,
            self.bout.easing()
        );
    }

    fn step(&mut self) {
        let dt = self.clock.begin_frame();
        if dt > 0.0 {
            for hit in self.bout.tick(dt, &self.sim) {
                self.report_hit(&hit);
            }
        }

        if let Outcome::Winner(player) = self.bout.outcome() {
            if !self.winner_announced {
                self.winner_announced = true;
                info!(
                    "{} wins after {:.1}s",
                    self.bout.fighter(player).name,
                    self.clock.simulated_secs()
                );
            }
        }
    }

    fn report_hit(&self, hit: &HitEvent) {
        let attacker = &self.bout.fighter(hit.attacker).name;
        let defender = &self.bout.fighter(hit.defender).name;
        info!(
            "{} hits {} at ({:.2}, {:.2}), health {}",
            attacker, defender, hit.fist.x, hit.fist.y, hit.health_left
        );
        if hit.health_left == 0 {
            info!("{} is knocked out", defender);
        }
    }

    fn draw(&mut self) {
        self.bout.draw(&mut self.canvas, &self.render, &self.sim);
        if self.canvas.depth() != 0 {
            warn!("Transform stack left at depth {} after drawing", self.canvas.depth());
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Stickfight...");

    let mut app = App::new()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Stickfight")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} frames ({:.0} fps, {} primitives), shutting down...",
                    app.clock.frame_count(),
                    app.clock.fps(),
                    app.canvas.calls()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if let Some(input) = app.input.process_keyboard_event(&event) {
                    app.handle_input(input);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                app.draw();
            }
            Event::AboutToWait => {
                app.step();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
