//! Table rendering

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use formcraft_core::{Control, ControlKind, Form, FormPreview, pack_rows};
use formcraft_survey::{Survey, SurveyStats, SurveyTemplate};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn forms_table(forms: &[&Form]) -> Table {
    let mut table = table(&["ID", "Name", "Status", "Tabs", "Fields", "Created"]);
    for form in forms {
        table.add_row(vec![
            form.id.to_string(),
            form.name.clone(),
            form.status.label().to_string(),
            form.tabs.len().to_string(),
            form.field_count().to_string(),
            form.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

pub fn surveys_table(surveys: &[&Survey]) -> Table {
    let mut table = table(&["ID", "Title", "Status", "Questions", "Responses", "Created"]);
    for survey in surveys {
        table.add_row(vec![
            survey.id.to_string(),
            survey.title.clone(),
            survey.status.label().to_string(),
            survey.questions.len().to_string(),
            survey.response_count.to_string(),
            survey.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

/// Every field of a form with its location
pub fn form_fields_table(form: &Form) -> Table {
    let mut table = table(&["Tab", "Group", "Field", "Type", "Required", "Visible"]);
    for tab in &form.tabs {
        for group in tab.groups() {
            for field in &group.fields {
                table.add_row(vec![
                    tab.title.clone(),
                    group.title.clone(),
                    field.label.clone(),
                    field.field_type().label().to_string(),
                    yes_no(field.required),
                    yes_no(field.is_visible()),
                ]);
            }
        }
    }
    table
}

/// Row packing of a previewed tab, one table row per layout row
pub fn layout_table(preview: &FormPreview) -> Table {
    let mut table = table(&["Row", "Left", "Right"]);
    for (i, row) in preview.rows.iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(row.iter().map(|group| {
            let controls: Vec<String> = group.controls.iter().map(describe_control).collect();
            format!(
                "{} [{}]\n{}",
                group.title,
                group.width,
                controls.join("\n")
            )
        }));
        table.add_row(cells);
    }
    table
}

pub fn templates_table(templates: &[SurveyTemplate]) -> Table {
    let mut table = table(&["ID", "Name", "Category", "Questions"]);
    for template in templates {
        table.add_row(vec![
            template.id.to_string(),
            template.name.to_string(),
            template.category.to_string(),
            template.blueprint.len().to_string(),
        ]);
    }
    table
}

/// Dashboard counters, one metric per row
pub fn stats_table(stats: &SurveyStats, form_count: usize) -> Table {
    let mut table = table(&["Metric", "Value"]);
    let rows = [
        ("Forms", form_count.to_string()),
        ("Total surveys", stats.total.to_string()),
        ("Active surveys", stats.active.to_string()),
        ("Draft surveys", stats.drafts.to_string()),
        ("Closed surveys", stats.closed.to_string()),
        ("Total responses", stats.total_responses.to_string()),
        ("Responses per survey", format!("{:.1}", stats.average_responses())),
    ];
    for (metric, value) in rows {
        table.add_row(vec![metric.to_string(), value]);
    }
    table
}

/// Row sizes of a form tab, used in log output
pub fn row_sizes(form: &Form, tab: usize) -> Vec<usize> {
    form.tab(tab)
        .map(|t| pack_rows(t.primary_groups()).iter().map(Vec::len).collect())
        .unwrap_or_default()
}

fn describe_control(control: &Control) -> String {
    let marker = if control.required { "*" } else { "" };
    let widget = match &control.kind {
        ControlKind::Input { input_type, .. } => format!("input:{input_type}"),
        ControlKind::DatePicker => "date".to_string(),
        ControlKind::Checkbox => "checkbox".to_string(),
        ControlKind::Select { options } => format!("select({})", options.len()),
        ControlKind::RadioGroup { options } => format!("radio({})", options.len()),
    };
    format!("- {}{} ({})", control.label, marker, widget)
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_core::{FieldType, GroupPatch, GroupWidth};

    #[test]
    fn test_layout_table_lists_rows() {
        let form = Form::new("Leave")
            .add_group(0, 0)
            .unwrap()
            .add_group(0, 0)
            .unwrap();
        let groups: Vec<_> = form.tabs[0].columns[0].groups.iter().map(|g| g.id).collect();
        let form = form
            .update_group(groups[0], GroupPatch::new().title("Dates").width(GroupWidth::Half))
            .update_group(groups[1], GroupPatch::new().title("Reason").width(GroupWidth::Half))
            .add_field(FieldType::Date, groups[0]);

        let preview = FormPreview::build(&form, 0).unwrap();
        let rendered = layout_table(&preview).to_string();

        assert!(rendered.contains("Dates [half]"));
        assert!(rendered.contains("Reason [half]"));
        assert!(rendered.contains("(date)"));
        assert_eq!(row_sizes(&form, 0), vec![2]);
        assert!(row_sizes(&form, 5).is_empty());
    }
}
