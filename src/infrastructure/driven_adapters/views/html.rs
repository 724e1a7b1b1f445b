//! Plain HTML View Renderer
//!
//! Renders the front office pages straight from a JSON context. Every
//! value taken from the context is escaped.

use std::fmt::Write;

use serde_json::Value;

use crate::domain::gateways::ViewRenderer;
use crate::shared::errors::RenderError;
use crate::shared::html::escape_html;

/// Form field: (name, label, input type)
type Field = (&'static str, &'static str, &'static str);

const PATIENT_FIELDS: [Field; 5] = [
    ("name", "Name", "text"),
    ("dob", "Date of birth", "date"),
    ("gender", "Gender", "text"),
    ("contact", "Contact info", "text"),
    ("address", "Address", "text"),
];

const DOCTOR_FIELDS: [Field; 4] = [
    ("name", "Name", "text"),
    ("specialty", "Specialty", "text"),
    ("contact", "Contact info", "text"),
    ("email", "Email", "email"),
];

const APPOINTMENT_FIELDS: [Field; 3] = [
    ("appointment_date", "Date", "datetime-local"),
    ("notes", "Notes", "text"),
    ("status", "Status", "text"),
];

/// Server-side HTML renderer for all front office views
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlViewRenderer;

impl HtmlViewRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for HtmlViewRenderer {
    fn render(&self, view: &str, context: &Value) -> Result<String, RenderError> {
        let (title, body) = match view {
            "index" => ("Dashboard", dashboard(context)),
            "patients" => ("Patients", patient_list(context)?),
            "add_patient" => (
                "Add Patient",
                form("/add_patient", "Add patient", &PATIENT_FIELDS, context, ""),
            ),
            "edit_patient" => {
                let id = scalar(context, "id");
                if id.is_empty() {
                    return Err(missing(view, "id"));
                }
                let action = format!("/edit_patient/{id}");
                ("Edit Patient", form(&action, "Save changes", &PATIENT_FIELDS, context, ""))
            }
            "doctors" => ("Doctors", doctor_list(context)?),
            "add_doctor" => (
                "Add Doctor",
                form("/add_doctor", "Add doctor", &DOCTOR_FIELDS, context, ""),
            ),
            "appointments" => ("Appointments", appointment_list(context)?),
            "add_appointment" => ("Book Appointment", appointment_form(context)?),
            other => return Err(RenderError::UnknownView(other.to_string())),
        };

        Ok(layout(title, context, &body))
    }
}

fn missing(view: &str, key: &str) -> RenderError {
    RenderError::MissingValue {
        view: view.to_string(),
        key: key.to_string(),
    }
}

fn array<'a>(view: &str, context: &'a Value, key: &str) -> Result<&'a [Value], RenderError> {
    context
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| missing(view, key))
}

/// A string or number from `value[key]`, empty when absent or null
fn scalar(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn cell(value: &Value, key: &str) -> String {
    escape_html(&scalar(value, key))
}

fn layout(title: &str, context: &Value, body: &str) -> String {
    let mut alerts = String::new();
    if let Some(notice) = context.get("notice").and_then(Value::as_str) {
        let _ = write!(alerts, "<div class=\"alert success\">{}</div>", escape_html(notice));
    }
    if let Some(errors) = context.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            alerts.push_str("<div class=\"alert error\"><ul>");
            for error in errors.iter().filter_map(Value::as_str) {
                let _ = write!(alerts, "<li>{}</li>", escape_html(error));
            }
            alerts.push_str("</ul></div>");
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} - Hospital Records</title></head>\n\
         <body>\n<nav><a href=\"/\">Dashboard</a> | <a href=\"/patients\">Patients</a> | \
         <a href=\"/doctors\">Doctors</a> | <a href=\"/appointments\">Appointments</a></nav>\n\
         <h1>{title}</h1>\n{alerts}\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn dashboard(context: &Value) -> String {
    let counts = context.get("counts").unwrap_or(&Value::Null);
    format!(
        "<ul class=\"counts\">\
         <li><a href=\"/patients\">Patients</a>: <span id=\"patient-count\">{}</span></li>\
         <li><a href=\"/doctors\">Doctors</a>: <span id=\"doctor-count\">{}</span></li>\
         <li><a href=\"/appointments\">Appointments</a>: <span id=\"appointment-count\">{}</span></li>\
         </ul>",
        cell(counts, "patients"),
        cell(counts, "doctors"),
        cell(counts, "appointments"),
    )
}

fn delete_button(path: &str, id: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{path}/{id}\" class=\"inline\">\
         <button type=\"submit\">Delete</button></form>"
    )
}

fn table(headers: &[&str], rows: &str, empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p class=\"empty\">{empty}</p>");
    }
    let mut head = String::new();
    for header in headers {
        let _ = write!(head, "<th>{header}</th>");
    }
    format!("<table>\n<thead><tr>{head}<th></th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>")
}

fn patient_list(context: &Value) -> Result<String, RenderError> {
    let mut rows = String::new();
    for patient in array("patients", context, "patients")? {
        let id = cell(patient, "id");
        let _ = writeln!(
            rows,
            "<tr id=\"patient-{id}\"><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/edit_patient/{id}\">Edit</a> {}</td></tr>",
            cell(patient, "name"),
            cell(patient, "dob"),
            cell(patient, "gender"),
            cell(patient, "contact"),
            cell(patient, "address"),
            delete_button("/delete_patient", &id),
        );
    }

    Ok(format!(
        "<p><a href=\"/add_patient\">Add patient</a></p>\n{}",
        table(
            &["ID", "Name", "Date of birth", "Gender", "Contact", "Address"],
            &rows,
            "No patients yet.",
        )
    ))
}

fn doctor_list(context: &Value) -> Result<String, RenderError> {
    let mut rows = String::new();
    for doctor in array("doctors", context, "doctors")? {
        let id = cell(doctor, "id");
        let _ = writeln!(
            rows,
            "<tr id=\"doctor-{id}\"><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            cell(doctor, "name"),
            cell(doctor, "specialty"),
            cell(doctor, "contact"),
            cell(doctor, "email"),
            delete_button("/delete_doctor", &id),
        );
    }

    Ok(format!(
        "<p><a href=\"/add_doctor\">Add doctor</a></p>\n{}",
        table(
            &["ID", "Name", "Specialty", "Contact", "Email"],
            &rows,
            "No doctors yet.",
        )
    ))
}

fn appointment_list(context: &Value) -> Result<String, RenderError> {
    let mut rows = String::new();
    for appointment in array("appointments", context, "appointments")? {
        let id = cell(appointment, "id");
        let _ = writeln!(
            rows,
            "<tr id=\"appointment-{id}\"><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            cell(appointment, "patient_name"),
            cell(appointment, "doctor_name"),
            cell(appointment, "appointment_date"),
            cell(appointment, "notes"),
            cell(appointment, "status"),
            delete_button("/delete_appointment", &id),
        );
    }

    Ok(format!(
        "<p><a href=\"/add_appointment\">Book appointment</a></p>\n{}",
        table(
            &["ID", "Patient", "Doctor", "Date", "Notes", "Status"],
            &rows,
            "No appointments yet.",
        )
    ))
}

fn form(action: &str, submit: &str, fields: &[Field], context: &Value, extra: &str) -> String {
    let values = context.get("form").unwrap_or(&Value::Null);
    let mut inputs = String::from(extra);
    for (name, label, kind) in fields {
        let _ = write!(
            inputs,
            "<p><label for=\"{name}\">{label}</label> \
             <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{}\"></p>",
            cell(values, name),
        );
    }

    format!(
        "<form method=\"post\" action=\"{}\">\n{inputs}\n<p><button type=\"submit\">{submit}</button></p>\n</form>",
        escape_html(action)
    )
}

fn select(name: &str, label: &str, options: &[Value], selected: &str) -> String {
    let mut out = format!(
        "<p><label for=\"{name}\">{label}</label> <select id=\"{name}\" name=\"{name}\">\
         <option value=\"\">Select...</option>"
    );
    for option in options {
        let id = cell(option, "id");
        let marker = if id == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{id}\"{marker}>{}</option>",
            cell(option, "name")
        );
    }
    out.push_str("</select></p>");
    out
}

fn appointment_form(context: &Value) -> Result<String, RenderError> {
    let patients = array("add_appointment", context, "patients")?;
    let doctors = array("add_appointment", context, "doctors")?;
    let values = context.get("form").unwrap_or(&Value::Null);

    let pickers = format!(
        "{}{}",
        select("patient_id", "Patient", patients, &cell(values, "patient_id")),
        select("doctor_id", "Doctor", doctors, &cell(values, "doctor_id")),
    );

    Ok(form(
        "/add_appointment",
        "Book appointment",
        &APPOINTMENT_FIELDS,
        context,
        &pickers,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_view_is_an_error() {
        let result = HtmlViewRenderer::new().render("nope", &json!({}));
        assert!(matches!(result, Err(RenderError::UnknownView(_))));
    }

    #[test]
    fn test_list_requires_rows() {
        let result = HtmlViewRenderer::new().render("patients", &json!({}));
        assert!(matches!(result, Err(RenderError::MissingValue { .. })));
    }

    #[test]
    fn test_patient_list_escapes_values() {
        let html = HtmlViewRenderer::new()
            .render(
                "patients",
                &json!({
                    "patients": [{"id": 1, "name": "<script>", "dob": "1990-01-01",
                                  "gender": "F", "contact": "555", "address": "x"}],
                    "notice": "Patient added successfully!"
                }),
            )
            .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Patient added successfully!"));
        assert!(html.contains("action=\"/delete_patient/1\""));
    }

    #[test]
    fn test_empty_list_message() {
        let html = HtmlViewRenderer::new()
            .render("doctors", &json!({"doctors": []}))
            .unwrap();
        assert!(html.contains("No doctors yet."));
    }

    #[test]
    fn test_form_is_prefilled_and_shows_errors() {
        let html = HtmlViewRenderer::new()
            .render(
                "edit_patient",
                &json!({
                    "id": 4,
                    "form": {"name": "Alice", "dob": "1990-01-01", "gender": null},
                    "errors": ["gender: gender is required"]
                }),
            )
            .unwrap();

        assert!(html.contains("action=\"/edit_patient/4\""));
        assert!(html.contains("name=\"name\" type=\"text\" value=\"Alice\""));
        assert!(html.contains("name=\"gender\" type=\"text\" value=\"\""));
        assert!(html.contains("gender: gender is required"));
    }

    #[test]
    fn test_appointment_form_marks_selection() {
        let html = HtmlViewRenderer::new()
            .render(
                "add_appointment",
                &json!({
                    "patients": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bea"}],
                    "doctors": [{"id": 1, "name": "Dr. Bob"}],
                    "form": {"patient_id": "2"}
                }),
            )
            .unwrap();

        assert!(html.contains("<option value=\"2\" selected>Bea</option>"));
        assert!(html.contains("<option value=\"1\">Alice</option>"));
    }
}
