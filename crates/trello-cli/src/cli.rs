//! Command-line argument structs and command handlers.
//!
//! Each subcommand has a clap argument struct that converts into a core
//! parameter type from `trello_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Trello facade
//! ```
//!
//! Required ids are declared optional here and checked by hand so that a
//! missing one yields the same short message for every command.

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use trello_core::{
    display::NAME_WIDTH, parse_index, Card, CreateCard, Entity, Id, ListBoards, MoveCard, Table,
    Trello, TrelloError,
};

use crate::renderer::TerminalRenderer;

const LABEL_NAME_WIDTH: usize = 30;
const LABEL_COLOR_WIDTH: usize = 10;

fn require(value: Option<String>, what: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail!("please specify the {what} id."),
    }
}

fn parse_position(value: Option<String>) -> Result<Option<i64>> {
    Ok(value.as_deref().map(parse_index).transpose()?)
}

/// Turns a 4xx on a parent lookup into a short user-facing message.
fn locate(err: TrelloError, what: &str) -> anyhow::Error {
    if err.is_client_error() {
        anyhow!("failed to locate the specified {what}.")
    } else {
        err.into()
    }
}

/// List the member's boards
#[derive(Args)]
pub struct ListBoardsArgs {
    /// Only show the board with this id
    #[arg(long)]
    pub board_id: Option<String>,
    /// Which boards to include (all, closed, members, open, organization,
    /// public, starred)
    #[arg(long, default_value = "open")]
    pub filter: String,
}

impl TryFrom<ListBoardsArgs> for ListBoards {
    type Error = anyhow::Error;

    fn try_from(val: ListBoardsArgs) -> Result<Self> {
        Ok(ListBoards {
            board_id: val.board_id,
            filter: val.filter.parse()?,
        })
    }
}

/// Arguments naming a board
#[derive(Args)]
pub struct BoardIdArgs {
    /// Board to operate on
    #[arg(long)]
    pub board_id: Option<String>,
}

impl TryFrom<BoardIdArgs> for Id {
    type Error = anyhow::Error;

    fn try_from(val: BoardIdArgs) -> Result<Self> {
        Ok(Id::new(require(val.board_id, "board")?))
    }
}

/// Arguments naming a list
#[derive(Args)]
pub struct ListIdArgs {
    /// List (column) to operate on
    #[arg(long)]
    pub list_id: Option<String>,
}

impl TryFrom<ListIdArgs> for Id {
    type Error = anyhow::Error;

    fn try_from(val: ListIdArgs) -> Result<Self> {
        Ok(Id::new(require(val.list_id, "list")?))
    }
}

/// Arguments naming a card
#[derive(Args)]
pub struct CardIdArgs {
    /// Card to operate on
    #[arg(long)]
    pub card_id: Option<String>,
}

impl TryFrom<CardIdArgs> for Id {
    type Error = anyhow::Error;

    fn try_from(val: CardIdArgs) -> Result<Self> {
        Ok(Id::new(require(val.card_id, "card")?))
    }
}

/// Create a new card in a list
#[derive(Args)]
pub struct CreateCardArgs {
    /// List (column) to create the card in
    #[arg(long)]
    pub list_id: Option<String>,
    /// Title of the card
    #[arg(long)]
    pub name: Option<String>,
    /// Optional description
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date as RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    /// Label ids as comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,
    /// 0-based index to insert at; negative counts from the end. Appends
    /// when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub position: Option<String>,
    /// Comment to post on the new card
    #[arg(long)]
    pub comment: Option<String>,
}

impl TryFrom<CreateCardArgs> for CreateCard {
    type Error = anyhow::Error;

    fn try_from(val: CreateCardArgs) -> Result<Self> {
        let list_id = require(val.list_id, "list")?;
        let Some(name) = val.name else {
            bail!("please specify the card name.");
        };

        Ok(CreateCard {
            list_id,
            name,
            desc: val.desc,
            due: val.due,
            labels: val.labels,
            position: parse_position(val.position)?,
            comment: val.comment,
        })
    }
}

/// Move a card to a list
#[derive(Args)]
pub struct MoveCardArgs {
    /// Card to move
    #[arg(long)]
    pub card_id: Option<String>,
    /// Destination list (may be the card's current list)
    #[arg(long)]
    pub list_id: Option<String>,
    /// 0-based index in the destination list; negative counts from the end.
    /// Appends when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub position: Option<String>,
}

impl TryFrom<MoveCardArgs> for MoveCard {
    type Error = anyhow::Error;

    fn try_from(val: MoveCardArgs) -> Result<Self> {
        Ok(MoveCard {
            card_id: require(val.card_id, "card")?,
            list_id: require(val.list_id, "list")?,
            position: parse_position(val.position)?,
        })
    }
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List the member's boards
    Boards(ListBoardsArgs),
    /// List the lists (columns) of a board
    Lists(BoardIdArgs),
    /// List the cards of a list
    Cards(ListIdArgs),
    /// List the labels of a board
    Labels(BoardIdArgs),
}

#[derive(Subcommand)]
pub enum CreateCommands {
    /// Create a card
    Card(CreateCardArgs),
}

#[derive(Subcommand)]
pub enum DeleteCommands {
    /// Delete a card
    Card(CardIdArgs),
}

#[derive(Subcommand)]
pub enum MoveCommands {
    /// Move a card
    Card(MoveCardArgs),
}

/// Runs parsed commands against a [`Trello`] client.
pub struct Cli {
    trello: Trello,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(trello: Trello, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            trello,
            renderer,
            json,
        }
    }

    pub fn handle_list_command(&self, command: ListCommands) -> Result<()> {
        match command {
            ListCommands::Boards(args) => self.list_boards(args),
            ListCommands::Lists(args) => self.list_lists(args),
            ListCommands::Cards(args) => self.list_cards(args),
            ListCommands::Labels(args) => self.list_labels(args),
        }
    }

    pub fn handle_create_command(&self, command: CreateCommands) -> Result<()> {
        match command {
            CreateCommands::Card(args) => {
                let card = self.trello.create_card(&args.try_into()?)?;
                self.report_card("Created", &card)
            }
        }
    }

    pub fn handle_delete_command(&self, command: DeleteCommands) -> Result<()> {
        match command {
            DeleteCommands::Card(args) => {
                let params: Id = args.try_into()?;
                self.trello
                    .delete_card(&params)
                    .map_err(|e| locate(e, "card"))?;
                self.renderer
                    .render(&format!("Deleted card `{}`.\n", params.id))
            }
        }
    }

    pub fn handle_move_command(&self, command: MoveCommands) -> Result<()> {
        match command {
            MoveCommands::Card(args) => {
                let card = self.trello.move_card(&args.try_into()?)?;
                self.report_card("Moved", &card)
            }
        }
    }

    fn list_boards(&self, args: ListBoardsArgs) -> Result<()> {
        let params: ListBoards = args.try_into()?;
        let boards = self
            .trello
            .list_boards(&params)
            .map_err(|e| locate(e, "board"))?;
        self.print_named(boards)
    }

    fn list_lists(&self, args: BoardIdArgs) -> Result<()> {
        let lists = self
            .trello
            .lists(&args.try_into()?)
            .map_err(|e| locate(e, "board"))?;
        self.print_named(lists)
    }

    fn list_cards(&self, args: ListIdArgs) -> Result<()> {
        let cards = self
            .trello
            .cards(&args.try_into()?)
            .map_err(|e| locate(e, "list"))?;
        self.print_named(cards)
    }

    fn list_labels(&self, args: BoardIdArgs) -> Result<()> {
        let labels = self
            .trello
            .labels(&args.try_into()?)
            .map_err(|e| locate(e, "board"))?;
        if self.json {
            return self.print_json(&labels);
        }

        let transport = self.trello.transport();
        let mut table = Table::new(&[LABEL_NAME_WIDTH, LABEL_COLOR_WIDTH]);
        for mut label in labels {
            let name = label.name(transport)?;
            let color = label.color(transport)?.unwrap_or_default();
            table.push(label.require_id()?, vec![name, color]);
        }
        self.renderer.render(&table.to_string())
    }

    /// Prints `| id | name |` rows, fetching names lazily where the listing
    /// did not include them.
    fn print_named<E: Entity>(&self, entities: Vec<E>) -> Result<()> {
        if self.json {
            return self.print_json(&entities);
        }

        let transport = self.trello.transport();
        let mut table = Table::new(&[NAME_WIDTH]);
        for mut entity in entities {
            let name: String = entity.get(transport, "name")?;
            table.push(entity.require_id()?, vec![name]);
        }
        self.renderer.render(&table.to_string())
    }

    fn print_json<E: Entity>(&self, entities: &[E]) -> Result<()> {
        let fields: Vec<_> = entities.iter().map(|entity| entity.fields()).collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        Ok(())
    }

    fn report_card(&self, verb: &str, card: &Card) -> Result<()> {
        if self.json {
            println!("{}", card.to_json()?);
            return Ok(());
        }

        let id = card.require_id()?;
        match card.fields().get("pos").and_then(serde_json::Value::as_f64) {
            Some(pos) => self
                .renderer
                .render(&format!("{verb} card `{id}` at position {pos}.\n")),
            None => self.renderer.render(&format!("{verb} card `{id}`.\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims_and_rejects_blank() {
        assert_eq!(require(Some(" abc ".to_string()), "board").unwrap(), "abc");
        let err = require(Some("  ".to_string()), "board").unwrap_err();
        assert_eq!(err.to_string(), "please specify the board id.");
        assert!(require(None, "list").is_err());
    }

    #[test]
    fn test_position_must_be_integer() {
        assert_eq!(parse_position(Some("-1".to_string())).unwrap(), Some(-1));
        assert_eq!(parse_position(None).unwrap(), None);
        assert!(parse_position(Some("1.5".to_string())).is_err());
    }

    #[test]
    fn test_locate_only_rewrites_client_errors() {
        let client = TrelloError::Client {
            reason: "Not Found".to_string(),
            body: "x".to_string(),
        };
        assert_eq!(
            locate(client, "board").to_string(),
            "failed to locate the specified board."
        );

        let server = TrelloError::Server {
            reason: "Bad Gateway".to_string(),
            body: "y".to_string(),
        };
        assert_eq!(locate(server, "board").to_string(), "Bad Gateway: y");
    }
}
