use crate::{Action, Game, State};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

pub fn bfs(game: &Game, mut on_step: impl FnMut()) -> Option<Vec<Action>> {
    let mut state_parent: IndexMap<State, (usize, Action)> = IndexMap::default();
    state_parent.insert(game.state.clone(), (!0usize, Action::Forward)); // Sentinel.

    let mut cursor = 0;
    let final_cursor = 'bfs: loop {
        if cursor >= state_parent.len() {
            return None;
        }

        let state = state_parent.get_index(cursor).unwrap().0.clone();
        // Losing states are dead ends and must not be expanded.
        if !state.is_losing(&game.field) {
            if state.is_winning() {
                break 'bfs cursor;
            }
            for (action, next) in Action::ALL.into_iter().zip(state.expand(&game.field)) {
                on_step();
                state_parent.entry(next).or_insert((cursor, action));
            }
        }
        cursor += 1;
    };

    let mut actions = std::iter::successors(Some(final_cursor), |&i| {
        let (parent, _) = state_parent[i];
        (parent != !0usize).then_some(parent)
    })
    .map(|i| state_parent[i].1)
    .collect::<Vec<_>>();
    actions.pop(); // The sentinel under the initial state.
    actions.reverse();
    Some(actions)
}
