use crate::dates::format_instant;
use crate::domain::{Action, Comment};
use crate::view::ColumnItem;

/// Build one card per logged action
///
/// The acting user is forwarded as the author; actions have no link and no
/// priority.
pub fn map_actions_to_columns(actions: &[Action]) -> Vec<ColumnItem> {
    actions
        .iter()
        .map(|action| {
            let mut item = ColumnItem::new(action.id, action.title.clone())
                .row("Date added", format_instant(&action.created_at));
            item.author = Some(action.user.clone());
            item
        })
        .collect()
}

/// Build one card per comment, titled with the commenter's name
pub fn map_comments_to_columns(comments: &[Comment]) -> Vec<ColumnItem> {
    comments
        .iter()
        .map(|comment| {
            let mut item = ColumnItem::new(comment.id, comment.user.name.clone())
                .row("Date added", format_instant(&comment.created_at));
            item.text = Some(comment.text.clone());
            item.author = Some(comment.user.clone());
            item
        })
        .collect()
}
