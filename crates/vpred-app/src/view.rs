//! Plain-text rendering of the form and result badge.

use vpred_models::{FieldKind, FormField, Verdict, VideoForm};

const KEY_MARKER: &str = "⭐";

/// About panel shown in the session banner and `--help`.
pub const MODEL_INFO: &str = "\
Predicts viral potential with a trained XGBoost model (accuracy 91%).
Stack: Flask API · React UI";

fn render_field(out: &mut String, form: &VideoForm, field: FormField) {
    let spec = field.spec();
    let marker = if spec.key { KEY_MARKER } else { "" };
    let label = format!("{} {}", spec.label, marker);
    let value = form.get(field);

    if value.is_empty() {
        out.push_str(&format!("  {:<26} ({})\n", label.trim_end(), spec.placeholder));
    } else {
        out.push_str(&format!("  {:<26} {}\n", label.trim_end(), value));
    }
}

/// Render the form: main fields first, then the advanced section.
pub fn render_form(form: &VideoForm) -> String {
    let mut out = String::new();

    for field in FormField::ALL.into_iter().filter(|f| !f.spec().advanced) {
        render_field(&mut out, form, field);
    }

    out.push_str("  Advanced Details (optional)\n");
    for field in FormField::ALL.into_iter().filter(|f| f.spec().advanced) {
        render_field(&mut out, form, field);
    }

    let tags = form.tag_list();
    if !tags.is_empty() {
        out.push_str(&format!("  {:<26} {}\n", "", tags.join(", ")));
    }

    out
}

/// Badge line for the current result; `None` before the first prediction.
pub fn render_badge(result: Option<Verdict>) -> Option<String> {
    result.map(|verdict| format!("[{}] {}", verdict.class(), verdict.badge()))
}

/// One line per field: wire name and label.
pub fn render_field_list() -> String {
    FormField::ALL
        .into_iter()
        .map(|field| {
            let spec = field.spec();
            let kind = match spec.kind {
                FieldKind::Number => "number",
                FieldKind::Text => "text",
            };
            format!("  {:<14} {} [{}]\n", field.as_str(), spec.label, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_shows_placeholders() {
        let rendered = render_form(&VideoForm::default());
        assert!(rendered.contains("(e.g., 5000)"));
        assert!(rendered.contains("(Catchy video title)"));
        assert!(rendered.contains("Advanced Details (optional)"));
    }

    #[test]
    fn test_filled_form_shows_values_and_tags() {
        let rendered = render_form(&VideoForm::example());
        assert!(rendered.contains("Likes ⭐"));
        assert!(rendered.contains("5000"));
        assert!(rendered.contains("iphone|review|tech"));
        assert!(rendered.contains("iphone, review, tech"));
    }

    #[test]
    fn test_advanced_fields_come_last() {
        let rendered = render_form(&VideoForm::default());
        let advanced = rendered.find("Advanced Details").unwrap();
        let publish_day = rendered.find("Publish Day").unwrap();
        let tags = rendered.find("Tags (pipe-separated)").unwrap();
        assert!(publish_day < advanced);
        assert!(advanced < tags);
    }

    #[test]
    fn test_badge() {
        assert_eq!(render_badge(None), None);
        assert_eq!(
            render_badge(Some(Verdict::LikelyViral)).unwrap(),
            "[viral] ✅ Likely to go VIRAL"
        );
        assert_eq!(
            render_badge(Some(Verdict::Unlikely)).unwrap(),
            "[not-viral] ⚠️ Unlikely to go viral"
        );
    }

    #[test]
    fn test_field_list_names_every_field() {
        let list = render_field_list();
        for field in FormField::ALL {
            assert!(list.contains(field.as_str()));
        }
        assert_eq!(list.lines().count(), FormField::ALL.len());
        assert!(list.contains("  likes          Likes [number]\n"));
    }

    #[test]
    fn test_field_lines_end_with_newline() {
        let rendered = render_form(&VideoForm::example());
        assert!(rendered.ends_with('\n'));
        assert!(rendered.contains(&format!("  {:<26} {}\n", "Likes ⭐", "5000")));
    }
}
