//! # Command Shell
//!
//! Line-driven event source: each input line is one user action.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products        list the catalog                                       │
//! │  view <id>       open the detail panel            (عرض التفاصيل)        │
//! │  back            return to the catalog            (العودة إلى القائمة)  │
//! │  add             add the selected product         (إضافة إلى السلة)     │
//! │  add <id>        add a product by id                                    │
//! │  cart            show / hide the cart panel       (السلة)               │
//! │  remove <i>      remove cart entry at position i  (حذف)                 │
//! │  checkout        start the simulated checkout     (إتمام الشراء)        │
//! │  cancel          cancel a processing checkout                           │
//! │  render          print the HTML page                                    │
//! │  state           print the current snapshot as JSON                     │
//! │  help            this list                                              │
//! │  quit            exit (waits for a processing checkout)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use bazaar_core::{Money, Receipt};

use crate::commands::{cart, catalog, checkout};
use crate::error::{ApiError, StartupResult};
use crate::render::render_page;
use crate::state::{ChannelNotifier, CheckoutOutcome, CheckoutState, StoreConfig, StoreState};

const HELP: &str = "\
products        list the catalog
view <id>       open the detail panel
back            return to the catalog
add             add the selected product
add <id>        add a product by id
cart            show / hide the cart panel
remove <i>      remove cart entry at position i (0-based)
checkout        start the checkout
cancel          cancel a processing checkout
render          print the HTML page
state           print the current state as JSON
help            this list
quit            exit";

// =============================================================================
// Parsing
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    View(u32),
    Back,
    Add(Option<u32>),
    Cart,
    Remove(usize),
    Checkout,
    Cancel,
    Render,
    State,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(String),

    #[error("`{command}` expects a number, got `{value}`")]
    InvalidArgument { command: String, value: String },

    #[error("`{0}` takes too many arguments")]
    TooManyArguments(String),
}

fn number<T: FromStr>(command: &str, value: &str) -> Result<T, ParseCommandError> {
    value.parse().map_err(|_| ParseCommandError::InvalidArgument {
        command: command.to_string(),
        value: value.to_string(),
    })
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(ParseCommandError::Empty)?;
        let arg = parts.next();

        let command = match (name, arg) {
            ("products", None) => ShellCommand::Products,
            ("view", Some(id)) => ShellCommand::View(number("view", id)?),
            ("view" | "remove", None) => {
                return Err(ParseCommandError::MissingArgument(name.to_string()))
            }
            ("back", None) => ShellCommand::Back,
            ("add", None) => ShellCommand::Add(None),
            ("add", Some(id)) => ShellCommand::Add(Some(number("add", id)?)),
            ("cart", None) => ShellCommand::Cart,
            ("remove", Some(index)) => ShellCommand::Remove(number("remove", index)?),
            ("checkout", None) => ShellCommand::Checkout,
            ("cancel", None) => ShellCommand::Cancel,
            ("render", None) => ShellCommand::Render,
            ("state", None) => ShellCommand::State,
            ("help", None) => ShellCommand::Help,
            ("quit" | "exit", None) => ShellCommand::Quit,
            (
                "products" | "back" | "cart" | "checkout" | "cancel" | "render" | "state" | "help"
                | "quit" | "exit",
                Some(_),
            ) => return Err(ParseCommandError::TooManyArguments(name.to_string())),
            (other, _) => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        if parts.next().is_some() {
            return Err(ParseCommandError::TooManyArguments(name.to_string()));
        }

        Ok(command)
    }
}

// =============================================================================
// Execution
// =============================================================================

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Owns the state and runs commands against it.
pub struct Shell {
    store: StoreState,
    checkout: CheckoutState,
    config: StoreConfig,
    notices: mpsc::UnboundedReceiver<Receipt>,
}

impl Shell {
    /// Builds the checkout runner with the configured delay; its success
    /// notices are written to the shell's output.
    pub fn new(store: StoreState, config: StoreConfig) -> Self {
        let (notifier, notices) = ChannelNotifier::new();
        let checkout = CheckoutState::with_notifier(config.checkout_delay(), Arc::new(notifier));
        Shell {
            store,
            checkout,
            config,
            notices,
        }
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    /// Runs one command and returns the text to show.
    pub async fn execute(&self, command: ShellCommand) -> Result<Reply, ApiError> {
        debug!(?command, "Executing shell command");
        let price = |amount: Money| self.config.format_price(amount);

        let text = match command {
            ShellCommand::Products => catalog::list_products(&self.store)
                .iter()
                .map(|p| format!("{}. {} - {}", p.id, p.name, price(p.price)))
                .collect::<Vec<_>>()
                .join("\n"),

            ShellCommand::View(id) => {
                let product = catalog::view_product(&self.store, id)?;
                format!(
                    "{}\n{}\n{}",
                    product.name,
                    product.description,
                    price(product.price)
                )
            }

            ShellCommand::Back => {
                catalog::clear_selection(&self.store);
                cart::close_cart(&self.store);
                "Back to catalog".to_string()
            }

            ShellCommand::Add(id) => {
                let response = match id {
                    Some(id) => cart::add_to_cart(&self.store, id)?,
                    None => cart::add_selected_to_cart(&self.store)?,
                };
                let added = response
                    .entries
                    .last()
                    .map(|e| e.product.name.as_str())
                    .unwrap_or_default();
                format!(
                    "Added {} (cart: {}, total: {})",
                    added,
                    response.count,
                    price(response.total)
                )
            }

            ShellCommand::Cart => {
                let snapshot = cart::toggle_cart(&self.store);
                if snapshot.cart_visible {
                    self.cart_listing()
                } else {
                    "Cart hidden".to_string()
                }
            }

            ShellCommand::Remove(index) => {
                cart::remove_from_cart(&self.store, index);
                self.cart_listing()
            }

            ShellCommand::Checkout => {
                checkout::checkout(&self.store, &self.checkout)?;
                "جاري المعالجة...".to_string()
            }

            ShellCommand::Cancel => match checkout::cancel_checkout(&self.checkout).await {
                Some(CheckoutOutcome::Cancelled) => "Checkout cancelled".to_string(),
                Some(CheckoutOutcome::Completed(receipt)) => {
                    format!("Checkout already completed: order {}", receipt.order_id)
                }
                None => "No checkout running".to_string(),
            },

            ShellCommand::Render => {
                let html = self
                    .store
                    .with_store(|s| render_page(&self.config, s.catalog(), &s.snapshot()));
                html.map_err(|e| ApiError::internal(format!("Render failed: {}", e)))?
            }

            ShellCommand::State => serde_json::to_string_pretty(&self.store.snapshot())
                .map_err(|e| ApiError::internal(format!("Serialization failed: {}", e)))?,

            ShellCommand::Help => HELP.to_string(),

            ShellCommand::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Text(text))
    }

    fn cart_listing(&self) -> String {
        let response = cart::get_cart(&self.store);
        if response.entries.is_empty() {
            return "السلة فارغة".to_string();
        }

        let mut lines: Vec<String> = response
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                format!(
                    "[{}] {} - {}",
                    i,
                    e.product.name,
                    self.config.format_price(e.price())
                )
            })
            .collect();
        lines.push(format!("المجموع: {}", self.config.format_price(response.total)));
        lines.join("\n")
    }

    /// The success alert shown when a checkout completes.
    pub fn completion_notice(&self, receipt: &Receipt) -> String {
        format!(
            "تم إتمام عملية الشراء بنجاح! (order {}, total {})",
            receipt.order_id,
            self.config.format_price(receipt.total)
        )
    }

    /// Reads commands line by line until `quit` or end of input, writing
    /// checkout notices as they arrive.
    ///
    /// A checkout still processing at that point is allowed to finish and
    /// its notice is written before returning.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> StartupResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            let text = tokio::select! {
                line = lines.next_line() => {
                    let line = match line? {
                        Some(line) => line,
                        None => break,
                    };
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match line.parse::<ShellCommand>() {
                        Ok(command) => match self.execute(command).await {
                            Ok(Reply::Text(text)) => text,
                            Ok(Reply::Quit) => break,
                            Err(e) => format!("error: {}", e),
                        },
                        Err(e) => format!("error: {}", e),
                    }
                }

                Some(receipt) = self.notices.recv() => self.completion_notice(&receipt),
            };

            write_line(&mut output, &text).await?;
        }

        if let Some(outcome) = self.checkout.wait().await {
            info!(?outcome, "Pending checkout finished before exit");
        }

        while let Ok(receipt) = self.notices.try_recv() {
            let text = self.completion_notice(&receipt);
            write_line(&mut output, &text).await?;
        }

        Ok(())
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
