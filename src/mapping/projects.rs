use super::participant_names;
use crate::dates::format_instant;
use crate::domain::{Project, User};
use crate::routes::project_href;
use crate::view::{Icon, ListDatum, ListItem};

/// Project list for the client dashboard and profile, using `users`
pub fn map_client_projects_to_list_items(projects: &[Project]) -> Vec<ListItem> {
    projects
        .iter()
        .map(|project| project_to_list_item(project, &project.users))
        .collect()
}

/// Project list for the project manager dashboard, using `developer_users`
pub fn map_pm_projects_to_list_items(projects: &[Project]) -> Vec<ListItem> {
    projects
        .iter()
        .map(|project| project_to_list_item(project, &project.developer_users))
        .collect()
}

fn project_to_list_item(project: &Project, participants: &[User]) -> ListItem {
    ListItem {
        title: project.title.clone(),
        data: vec![
            ListDatum::with_icon(Icon::Sunrise, format_instant(&project.created_at)),
            ListDatum::with_icon(Icon::Sunset, format_instant(&project.deadline)),
            ListDatum::with_icon(Icon::People, participant_names(participants)),
        ],
        right: Some(project.id),
        href: Some(project_href(project.id)),
    }
}
