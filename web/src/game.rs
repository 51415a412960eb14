use std::rc::Rc;

use clap::Args;
use jeopardy_core::{
    Board, BoardBuilder, BoardConfig, BuildError, BuildTicket, CellKey, DEFAULT_API_BASE, Session,
    SessionState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::board::{BoardView, ErrorView, LoadingView, grid};
use crate::client::{ClientError, JServiceClient};
use crate::utils::js_random_seed;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of categories across the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CATEGORIES_ACROSS)]
    pub categories: usize,

    /// Number of clues under each category
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: usize,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl GameProps {
    fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.categories, self.clues)
    }
}

pub(crate) enum Msg {
    Restart,
    BoardLoaded {
        ticket: BuildTicket,
        result: Result<Board, BuildError<ClientError>>,
    },
    Reveal {
        generation: u64,
        key: CellKey,
    },
}

pub(crate) struct GameView {
    session: Session,
    client: Rc<JServiceClient>,
    config: BoardConfig,
    seed: Option<u64>,
    onreveal: Callback<CellKey>,
}

impl GameView {
    fn reveal_callback(ctx: &Context<Self>, generation: u64) -> Callback<CellKey> {
        ctx.link().callback(move |key| Msg::Reveal { generation, key })
    }

    fn seed_for(&self, ticket: BuildTicket) -> u64 {
        self.seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(ticket.generation()))
    }

    fn restart(&mut self, ctx: &Context<Self>) {
        let ticket = self.session.begin_build();
        self.onreveal = Self::reveal_callback(ctx, ticket.generation());

        let builder = BoardBuilder::new(self.config, self.seed_for(ticket));
        let client = Rc::clone(&self.client);
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = builder.build(client.as_ref()).await;
            link.send_message(Msg::BoardLoaded { ticket, result });
        });
    }

    fn restart_label(&self) -> &'static str {
        if self.session.has_started() {
            "Restart"
        } else {
            "Start Game"
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let session = Session::new();
        Self {
            onreveal: Self::reveal_callback(ctx, session.generation()),
            session,
            client: Rc::new(JServiceClient::new(props.api_base.clone())),
            config: props.board_config(),
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                log::debug!("restart");
                self.restart(ctx);
                true
            }
            BoardLoaded { ticket, result } => self.session.finish_build(ticket, result),
            Reveal { generation, key } => match self.session.reveal(generation, key) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::warn!("ignoring click on {}: {}", key, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onrestart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        let content = match self.session.state() {
            SessionState::Idle => html! {},
            SessionState::Loading => html! { <LoadingView/> },
            SessionState::Ready(board) => html! {
                <BoardView grid={grid(board)} onreveal={self.onreveal.clone()}/>
            },
            SessionState::Failed(message) => html! {
                <ErrorView message={AttrValue::from(message.clone())}/>
            },
        };

        html! {
            <div class="jeopardy">
                <button id="restart" onclick={onrestart}>{self.restart_label()}</button>
                {content}
            </div>
        }
    }
}
