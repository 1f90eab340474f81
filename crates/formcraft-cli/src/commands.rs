//! Command handlers. Each returns the text printed on stdout.

use anyhow::{Context, Result, anyhow};
use formcraft_core::{Form, FormDocument, FormPreview};
use formcraft_storage::{
    BlobStore, FormRepository, ListFilter, Role, SessionStore, SurveyRepository, User,
};
use formcraft_survey::{SurveyStats, templates as survey_templates};
use std::sync::Arc;

use crate::output;
use crate::{FormCommands, SurveyCommands};

/// Role needed to create, copy or delete records
const EDITOR_ROLE: Role = Role::HrManager;

pub struct App {
    forms: FormRepository,
    surveys: SurveyRepository,
    session: SessionStore,
}

impl App {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            forms: FormRepository::new(store.clone()),
            surveys: SurveyRepository::new(store.clone()),
            session: SessionStore::new(store),
        }
    }

    fn require_editor(&self) -> Result<User> {
        Ok(self.session.authorize(EDITOR_ROLE)?)
    }

    pub fn forms(&self, command: FormCommands) -> Result<String> {
        match command {
            FormCommands::List { search, status } => {
                let forms = self.forms.list()?;
                let filter = list_filter(search, status);
                Ok(output::forms_table(&filter.apply(&forms)).to_string())
            }
            FormCommands::Show { id } => {
                let form = self.find_form(id)?;
                let mut text = format!(
                    "{} ({})\n{}",
                    form.name,
                    form.status.label(),
                    output::form_fields_table(&form)
                );
                for problem in form.validate() {
                    text.push_str(&format!("\nwarning: {problem}"));
                }
                Ok(text)
            }
            FormCommands::Export { id } => {
                let form = self.find_form(id)?;
                Ok(form.serialize().to_json_pretty()?)
            }
            FormCommands::Import { path } => {
                self.require_editor()?;
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let form = FormDocument::from_json(&json)?.into_form();
                self.forms.save(&form)?;
                tracing::info!(form_id = %form.id, "imported form");
                Ok(form.id.to_string())
            }
            FormCommands::Layout { id, tab } => {
                let form = self.find_form(id)?;
                let preview = FormPreview::build(&form, tab)?;
                tracing::debug!(
                    form_id = %id,
                    tab,
                    rows = ?output::row_sizes(&form, tab),
                    "packed layout"
                );
                Ok(output::layout_table(&preview).to_string())
            }
            FormCommands::Duplicate { id } => {
                self.require_editor()?;
                let copy = self
                    .forms
                    .duplicate(id)?
                    .ok_or_else(|| anyhow!("Form {id} not found"))?;
                tracing::info!(source = %id, form_id = %copy.id, "duplicated form");
                Ok(copy.id.to_string())
            }
            FormCommands::Delete { id } => {
                self.require_editor()?;
                if !self.forms.delete(id)? {
                    return Err(anyhow!("Form {id} not found"));
                }
                tracing::info!(form_id = %id, "deleted form");
                Ok(format!("Deleted form {id}"))
            }
            FormCommands::New { name } => {
                self.require_editor()?;
                let form = Form::new(name);
                self.forms.save(&form)?;
                tracing::info!(form_id = %form.id, "created form");
                Ok(form.id.to_string())
            }
        }
    }

    pub fn surveys(&self, command: SurveyCommands) -> Result<String> {
        match command {
            SurveyCommands::List { search, status } => {
                let surveys = self.surveys.list()?;
                let filter = list_filter(search, status);
                Ok(output::surveys_table(&filter.apply(&surveys)).to_string())
            }
            SurveyCommands::Delete { id } => {
                self.require_editor()?;
                if !self.surveys.delete(id)? {
                    return Err(anyhow!("Survey {id} not found"));
                }
                tracing::info!(survey_id = %id, "deleted survey");
                Ok(format!("Deleted survey {id}"))
            }
        }
    }

    pub fn stats(&self) -> Result<String> {
        let surveys = self.surveys.list()?;
        let forms = self.forms.list()?;
        let stats = SurveyStats::collect(&surveys);
        Ok(output::stats_table(&stats, forms.len()).to_string())
    }

    pub fn login(&self, name: String, email: String, role: Role) -> Result<String> {
        let user = User::new(uuid::Uuid::new_v4().to_string(), name, role, email);
        self.session.sign_in(&user)?;
        Ok(format!("Signed in as {} ({})", user.name, user.role.label()))
    }

    pub fn logout(&self) -> Result<String> {
        self.session.sign_out()?;
        Ok("Signed out".to_string())
    }

    pub fn whoami(&self) -> Result<String> {
        Ok(match self.session.current()? {
            Some(user) => format!("{} <{}> ({})", user.name, user.email, user.role.label()),
            None => "Not signed in".to_string(),
        })
    }

    fn find_form(&self, id: formcraft_core::FormId) -> Result<Form> {
        self.forms
            .get(id)?
            .ok_or_else(|| anyhow!("Form {id} not found"))
    }
}

pub fn templates() -> String {
    output::templates_table(survey_templates()).to_string()
}

fn list_filter(search: Option<String>, status: Option<formcraft_core::Status>) -> ListFilter {
    let mut filter = ListFilter::new();
    if let Some(search) = search {
        filter = filter.search(search);
    }
    if let Some(status) = status {
        filter = filter.status(status);
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_core::{FieldType, FormId, Status};
    use formcraft_storage::MemoryStore;
    use formcraft_survey::Survey;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// App with an HR manager signed in
    fn app() -> App {
        let app = App::new(Arc::new(MemoryStore::new()));
        app.login("Camille".to_string(), "hr@example.com".to_string(), Role::HrManager)
            .unwrap();
        app
    }

    fn create(app: &App, name: &str) -> FormId {
        let id = app
            .forms(FormCommands::New { name: name.to_string() })
            .unwrap();
        id.parse().unwrap()
    }

    #[test]
    fn test_new_then_list() {
        let app = app();
        create(&app, "Leave request");
        create(&app, "Onboarding");

        let listed = app
            .forms(FormCommands::List {
                search: Some("leave".to_string()),
                status: None,
            })
            .unwrap();
        assert!(listed.contains("Leave request"));
        assert!(!listed.contains("Onboarding"));

        let published = app
            .forms(FormCommands::List {
                search: None,
                status: Some(Status::Published),
            })
            .unwrap();
        assert!(!published.contains("Leave request"));
    }

    #[test]
    fn test_export_then_import() {
        let app = app();
        let form = Form::new("Expense claim")
            .add_group(0, 0)
            .unwrap();
        let group_id = form.tabs[0].columns[0].groups[0].id;
        let form = form.add_field(FieldType::Number, group_id);
        app.forms.save(&form).unwrap();

        let json = app.forms(FormCommands::Export { id: form.id }).unwrap();
        app.forms(FormCommands::Delete { id: form.id }).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(&path, json).unwrap();
        let imported = app.forms(FormCommands::Import { path }).unwrap();

        assert_eq!(imported, form.id.to_string());
        assert_eq!(app.forms.get(form.id).unwrap(), Some(form));
    }

    #[test]
    fn test_duplicate_and_delete() {
        let app = app();
        let id = create(&app, "Exit interview");

        let copy: FormId = app
            .forms(FormCommands::Duplicate { id })
            .unwrap()
            .parse()
            .unwrap();
        assert_ne!(copy, id);
        assert_eq!(app.forms.list().unwrap().len(), 2);

        app.forms(FormCommands::Delete { id }).unwrap();
        let err = app.forms(FormCommands::Delete { id }).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_unknown_form_is_an_error() {
        let app = app();
        let id = FormId::new();
        assert!(app.forms(FormCommands::Show { id }).is_err());
        assert!(app.forms(FormCommands::Layout { id, tab: 0 }).is_err());
        assert!(app.forms(FormCommands::Duplicate { id }).is_err());
    }

    #[test]
    fn test_layout_of_missing_tab_is_an_error() {
        let app = app();
        let id = create(&app, "Leave request");
        assert!(app.forms(FormCommands::Layout { id, tab: 0 }).is_ok());
        assert!(app.forms(FormCommands::Layout { id, tab: 3 }).is_err());
    }

    #[test]
    fn test_surveys_list_and_delete() {
        let app = app();
        let survey = Survey::new("Pulse check").publish();
        app.surveys.save(&survey).unwrap();

        let listed = app
            .surveys(SurveyCommands::List {
                search: None,
                status: Some(Status::Published),
            })
            .unwrap();
        assert!(listed.contains("Pulse check"));

        app.surveys(SurveyCommands::Delete { id: survey.id }).unwrap();
        assert!(app.surveys.list().unwrap().is_empty());
    }

    #[test]
    fn test_editing_requires_sign_in() {
        let app = App::new(Arc::new(MemoryStore::new()));
        let err = app
            .forms(FormCommands::New { name: "Leave".to_string() })
            .unwrap_err();
        assert!(err.to_string().contains("Not signed in"));
        assert!(app.forms.list().unwrap().is_empty());
    }

    #[test]
    fn test_employee_cannot_edit() {
        let app = app();
        let id = create(&app, "Leave request");
        let survey = Survey::new("Pulse check");
        app.surveys.save(&survey).unwrap();

        app.login("Sam".to_string(), "sam@example.com".to_string(), Role::Employee)
            .unwrap();

        assert!(app.forms(FormCommands::New { name: "Other".to_string() }).is_err());
        assert!(app.forms(FormCommands::Duplicate { id }).is_err());
        assert!(app.forms(FormCommands::Delete { id }).is_err());
        assert!(app.surveys(SurveyCommands::Delete { id: survey.id }).is_err());
        assert_eq!(app.forms.list().unwrap().len(), 1);
        assert_eq!(app.surveys.list().unwrap().len(), 1);

        let listed = app
            .forms(FormCommands::List {
                search: None,
                status: None,
            })
            .unwrap();
        assert!(listed.contains("Leave request"));
    }

    #[test]
    fn test_admin_can_edit() {
        let app = App::new(Arc::new(MemoryStore::new()));
        app.login("Ada".to_string(), "admin@example.com".to_string(), Role::Admin)
            .unwrap();
        let id = create(&app, "Onboarding");
        assert!(app.forms(FormCommands::Delete { id }).is_ok());
    }

    #[test]
    fn test_whoami_and_logout() {
        let app = app();
        assert!(app.whoami().unwrap().contains("Camille <hr@example.com> (HR manager)"));

        app.logout().unwrap();
        assert_eq!(app.whoami().unwrap(), "Not signed in");
    }

    #[test]
    fn test_stats() {
        let app = app();
        create(&app, "Leave request");
        let published = Survey {
            response_count: 12,
            ..Survey::new("Pulse").publish()
        };
        app.surveys.save(&published).unwrap();
        app.surveys.save(&Survey::new("Exit")).unwrap();

        let text = app.stats().unwrap();

        assert!(text.contains("Total surveys"));
        assert!(text.contains("12"));
    }

    #[test]
    fn test_templates_table() {
        let text = templates();
        assert!(text.contains("HR"));
        assert_eq!(survey_templates().len(), 6);
    }
}
