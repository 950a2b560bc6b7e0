use crate::api::FormApi;
use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{self, Handler as TerminalEventHandler};
use crate::logger::{self, LogReceiver};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_receiver = logger::init(config.log_level_filter()?)?;

        info!("Starting application...");
        let api = FormApi::new(&config.api_url, config.request_timeout())?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default.",
                config.theme_name
            );
            Theme::default()
        });

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, theme))),
        };
        app.start_network(rx, api);
        app.start_ui(log_receiver).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread that runs network requests one at a time.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, api: FormApi) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &api);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        debug!("Network event finished with error: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even if the
    /// loop fails.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal, &log_receiver).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        log_receiver: &LogReceiver,
    ) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.fetch_records()?;
        }

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let mut state = self.state.lock().await;
                while let Ok(entry) = log_receiver.try_recv() {
                    state.add_log_entry(entry);
                }
                let size = terminal.size()?;
                state.set_terminal_size(size);
                terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            }

            let event = terminal_event_handler.next()?;
            let mut state = self.state.lock().await;
            if !terminal::handle(event, &mut state) {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
