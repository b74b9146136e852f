use crate::catalog::StockPolicy;
use crate::config::Config;
use crate::source::ProductSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the catalog page until the user quits.
pub fn run(config: &Config, source: Arc<dyn ProductSource>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("product-fetch")
        .enable_all()
        .build()?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let policy = StockPolicy::from_reject_flag(config.basket.reject_out_of_stock);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(policy);
    app.start_fetch(runtime.handle(), source, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::ProductsFetched { generation, result }) => {
                app.on_products_fetched(generation, result)
            }
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app aborts a fetch still in flight.
    drop(app);
    drop(events);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("Catalog page closed");
    Ok(())
}
