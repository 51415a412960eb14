use jeopardy_core::{Board, CellKey, Clue, RevealState};
use yew::prelude::*;

/// Shown in a body cell until its clue is clicked.
pub(crate) const PLACEHOLDER: &str = "?";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GridCell {
    pub key: CellKey,
    pub state: RevealState,
    pub text: String,
}

/// Everything the table shows, derived from a [`Board`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<GridCell>>,
}

pub(crate) fn cell_text(clue: &Clue) -> &str {
    clue.displayed_text().unwrap_or(PLACEHOLDER)
}

pub(crate) fn grid(board: &Board) -> Grid {
    let headers = board
        .categories()
        .iter()
        .map(|category| category.title().to_uppercase())
        .collect();

    let rows = (0..board.clues_per_category())
        .map(|clue| {
            board
                .categories()
                .iter()
                .enumerate()
                .map(|(category, column)| {
                    let value = &column.clues()[clue];
                    GridCell {
                        key: CellKey::new(category, clue),
                        state: value.showing(),
                        text: cell_text(value).to_string(),
                    }
                })
                .collect()
        })
        .collect();

    Grid { headers, rows }
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    cell: GridCell,
    callback: Callback<CellKey>,
}

#[function_component(ClueCell)]
fn clue_cell_component(props: &ClueCellProps) -> Html {
    use RevealState::*;

    let ClueCellProps { cell, callback } = props.clone();
    let GridCell { key, state, text } = cell;

    let class = classes!(
        "clue",
        match state {
            Hidden => "hidden",
            Question => "question",
            Answer => "answer",
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}) click", key);
        callback.emit(key);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub grid: Grid,
    pub onreveal: Callback<CellKey>,
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let BoardProps { grid, onreveal } = props;

    html! {
        <table id="board">
            <thead>
                <tr>
                    { for grid.headers.iter().map(|title| html! { <th>{title.clone()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for grid.rows.iter().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|cell| html! {
                                    <ClueCell
                                        key={cell.key.to_string()}
                                        cell={cell.clone()}
                                        callback={onreveal.clone()}
                                    />
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[function_component(LoadingView)]
pub(crate) fn loading_component() -> Html {
    html! {
        <h2 id="loading">{"Loading..."}</h2>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ErrorProps {
    pub message: AttrValue,
}

#[function_component(ErrorView)]
pub(crate) fn error_component(props: &ErrorProps) -> Html {
    html! {
        <article id="error" role="alert">
            <h2>{"Could not load the board"}</h2>
            <p>{props.message.clone()}</p>
        </article>
    }
}
