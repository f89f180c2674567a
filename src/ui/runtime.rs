use crate::api::{ApiClient, ApiWorker, EventSink};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Grace period for in-flight requests once the UI has exited.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

pub fn run(config: &Config) -> io::Result<()> {
    let base_url = config.api.parsed_base_url().map_err(io::Error::other)?;
    let start = config.start_route().map_err(io::Error::other)?;
    let client = ApiClient::new(base_url).map_err(io::Error::other)?;
    let tick_rate = config.ui.tick_rate();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("sakila-api")
        .enable_all()
        .build()?;

    let events = EventHandler::new(tick_rate);
    let (api_sender, worker) = ApiWorker::new(client);
    let api_tx = events.sender();
    let sink: EventSink = Arc::new(move |event| {
        let _ = api_tx.send(AppEvent::Api(event));
    });
    runtime.spawn(worker.run(sink));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(start);
    app.set_api_sender(api_sender);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize) | None => {}
            Some(AppEvent::Api(event)) => app.on_api_event(event),
        }
    }

    // Dropping the app closes the command channel and stops the worker
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("exited");
    Ok(())
}
