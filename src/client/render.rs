use crate::client::store::ClientStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Edit,
    Delete,
    MarkRead,
}

/// One rendered record: what to show plus the controls it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub badges: Vec<String>,
    pub controls: Vec<Control>,
}

/// Capability set the dashboard hands to rendered rows.
pub trait Actions {
    fn on_edit(&mut self, id: &str);
    fn on_delete(&mut self, id: &str);
    fn on_mark_read(&mut self, id: &str);
}

pub fn render_projects(store: &ClientStore) -> Vec<Row> {
    store
        .projects
        .iter()
        .map(|project| {
            let mut badges = project.tags.clone();
            if project.featured {
                badges.insert(0, "featured".to_string());
            }
            Row {
                id: project.id.to_string(),
                title: project.title.clone(),
                detail: project.category.clone().unwrap_or_default(),
                badges,
                controls: vec![Control::Edit, Control::Delete],
            }
        })
        .collect()
}

pub fn render_messages(store: &ClientStore) -> Vec<Row> {
    store
        .messages
        .iter()
        .map(|message| {
            let mut controls = Vec::with_capacity(2);
            if !message.read {
                controls.push(Control::MarkRead);
            }
            controls.push(Control::Delete);

            Row {
                id: message.id.to_string(),
                title: format!("{} <{}>", message.name, message.email),
                detail: message.subject.clone(),
                badges: if message.read { Vec::new() } else { vec!["unread".to_string()] },
                controls,
            }
        })
        .collect()
}

/// Read-only cards for the public site.
pub fn render_public_projects(store: &ClientStore) -> Vec<Row> {
    store
        .projects
        .iter()
        .map(|project| Row {
            id: project.id.to_string(),
            title: project.title.clone(),
            detail: project.description.clone(),
            badges: project.tags.clone(),
            controls: Vec::new(),
        })
        .collect()
}

/// Routes a triggered control to the capability set. Controls the row does
/// not offer are ignored.
pub fn dispatch<A: Actions + ?Sized>(row: &Row, control: Control, actions: &mut A) -> bool {
    if !row.controls.contains(&control) {
        return false;
    }

    match control {
        Control::Edit => actions.on_edit(&row.id),
        Control::Delete => actions.on_delete(&row.id),
        Control::MarkRead => actions.on_mark_read(&row.id),
    }
    true
}
