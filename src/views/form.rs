use crate::controller::EditTarget;
use crate::data::draft::{Draft, RatingField, TextField};
use crate::router::View;
use crate::utils::escape_html;
use crate::views::layout;

fn text_input(draft: &Draft, field: TextField) -> String {
    let name = field.input_name();
    let label = escape_html(field.label());
    let value = escape_html(draft.field(field));

    match field {
        TextField::Anecdote => format!(
            "<textarea name=\"{}\" placeholder=\"{}\">{}</textarea>\n",
            name, label, value
        ),
        _ => format!(
            "<input name=\"{}\" placeholder=\"{}\" value=\"{}\">\n",
            name, label, value
        )
    }
}

fn rating_input(draft: &Draft, field: RatingField) -> String {
    format!(
        "<input name=\"{}\" placeholder=\"{}\" inputmode=\"numeric\" value=\"{}\">\n",
        field.input_name(),
        escape_html(field.label()),
        draft.rating(field)
    )
}

/// The save control is disabled while a previous save is still geocoding.
pub fn render(draft: &Draft, target: EditTarget, saving: bool) -> String {
    let (heading, button) = match target {
        EditTarget::Creating => ("➕ Ajouter un restaurant", "Ajouter"),
        EditTarget::Editing { .. } => ("✏️ Modifier un restaurant", "Enregistrer")
    };

    let mut body = format!("<h1>{}</h1>\n", heading);
    if saving {
        body.push_str(&format!(
            "<p>Un enregistrement est déjà en cours. Il apparaîtra sur la <a href=\"{}\">carte</a> une fois terminé.</p>\n",
            View::Map.path()
        ));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n",
        View::Form.path()
    ));
    for field in TextField::ALL.iter() {
        body.push_str(&text_input(draft, *field));
    }
    for field in RatingField::ALL.iter() {
        body.push_str(&rating_input(draft, *field));
    }
    if saving {
        body.push_str("<button type=\"submit\" disabled>Enregistrement…</button>\n");
    } else {
        body.push_str(&format!("<button type=\"submit\">{}</button>\n", button));
    }
    body.push_str("</form>\n");

    layout(button, Some(View::Form), "", &body)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::controller::EditTarget;
    use crate::data::draft::{Draft, RatingField, TextField};

    use super::render;

    #[test]
    fn test_render_empty_draft() {
        let page = render(&Draft::default(), EditTarget::Creating, false);

        assert!(page.contains("Ajouter un restaurant"));
        assert!(page.contains("<input name=\"nom\" placeholder=\"Nom\" value=\"\">"));
        assert!(page.contains("<textarea name=\"anecdote\" placeholder=\"Anecdote\"></textarea>"));
        assert!(page.contains("name=\"emplacement\" placeholder=\"Note emplacement\" inputmode=\"numeric\" value=\"0\""));
        assert!(page.contains("<button type=\"submit\">Ajouter</button>"));
        assert!(!page.contains("déjà en cours"));
    }

    #[test]
    fn test_render_editing_draft() {
        let mut draft = Draft::default();
        draft.set_field(TextField::Name, "L'Ami \"Jean\"");
        draft.set_rating(RatingField::Service, "4").unwrap();

        let target = EditTarget::Editing { index: 0, id: Uuid::new_v4() };
        let page = render(&draft, target, false);

        assert!(page.contains("Modifier un restaurant"));
        assert!(page.contains("value=\"L&#39;Ami &quot;Jean&quot;\""));
        assert!(page.contains("name=\"service\" placeholder=\"Note service\" inputmode=\"numeric\" value=\"4\""));
        assert!(page.contains(">Enregistrer</button>"));
    }

    #[test]
    fn test_render_disables_save_while_saving() {
        let page = render(&Draft::default(), EditTarget::Creating, true);

        assert!(page.contains("<button type=\"submit\" disabled>"));
        assert!(!page.contains(">Ajouter</button>"));
        assert!(page.contains("Un enregistrement est déjà en cours."));
        assert!(page.contains("<a href=\"/\">carte</a>"));
    }
}
