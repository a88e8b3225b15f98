use std::sync::OnceLock;

use clap::Parser;
use macroquad::prelude::{Conf, get_frame_time, next_frame, screen_height, screen_width};
use rand::SeedableRng;
use rand::rngs::StdRng;

use episim::{
    application::{Cli, Controller, Event, Flow, RuleKind, SimulationConfig, TickClock},
    domain::{ForestFire, Life, Rule, SimError, Timeline},
    input::{self, CommandPrompt},
    rendering::{Palette, WindowRenderer},
};

fn cli() -> &'static Cli {
    static CLI: OnceLock<Cli> = OnceLock::new();
    CLI.get_or_init(Cli::parse)
}

fn window_conf() -> Conf {
    let cli = cli();
    let (window_width, window_height) = SimulationConfig::try_from(cli.clone())
        .ok()
        .and_then(|config| config.window_size())
        .unwrap_or((1000, 800));

    Conf {
        window_title: "episim - forest fire & life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match SimulationConfig::try_from(cli().clone()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            eprintln!("episim: {}", err);
            return;
        }
    };

    let (rows, cols) = config.dimensions_for(screen_width(), screen_height());
    log::info!("Seed {} | grid {}x{} | {:?}", config.seed, rows, cols, config.rule);
    let rng = StdRng::seed_from_u64(config.seed);

    let result = match config.rule {
        RuleKind::Forest => {
            run(Timeline::create(rows, cols, ForestFire, config.parameters, rng), &config).await
        }
        RuleKind::Life => {
            run(Timeline::create(rows, cols, Life, config.parameters, rng), &config).await
        }
    };

    if let Err(err) = result {
        log::error!("Simulation stopped: {}", err);
        eprintln!("episim: {}", err);
    }
}

/// The control loop: input, pacing, controller, render
async fn run<R>(
    timeline: Result<Timeline<R, StdRng>, SimError>,
    config: &SimulationConfig,
) -> Result<(), SimError>
where
    R: Rule,
    R::Cell: Palette,
{
    let mut controller = Controller::new(timeline?);
    let mut renderer = WindowRenderer::new(config.cell_size, config.fps);
    let mut clock = TickClock::new(config.fps);
    let mut prompt = CommandPrompt::default();

    loop {
        renderer.begin_frame();
        let params = *controller.timeline().current_parameters();
        let mut events = input::poll_events(&mut prompt, &params);
        if clock.advance(get_frame_time(), controller.is_playing()) {
            events.push(Event::Tick);
        }
        renderer.set_overlay(prompt.overlay());

        for event in events {
            if controller.handle(event, &mut renderer)? == Flow::Quit {
                return Ok(());
            }
        }
        if !renderer.drawn() {
            controller.present(&mut renderer);
        }

        next_frame().await;
    }
}
