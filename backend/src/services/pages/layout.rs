//! Document shell and small markup helpers shared by the server-rendered pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Patients,
    Doctors,
    Appointments,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::Home,
        Section::Patients,
        Section::Doctors,
        Section::Appointments,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::Patients => "/patients",
            Section::Doctors => "/doctors",
            Section::Appointments => "/appointments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Patients => "Patients",
            Section::Doctors => "Doctors",
            Section::Appointments => "Appointments",
        }
    }
}

/// An empty list container the page script fills from `collection` once the
/// page has loaded. `kind` names the script's row renderer.
///
/// `<ul>` containers hold `<li>` rows, anything else holds `<div>` cards.
pub fn list_container(tag: &str, id: &str, class: &str, collection: &str, kind: &str, plural: &str) -> String {
    let placeholder = if tag == "ul" {
        format!(r#"<li class="px-4 py-8 text-center text-gray-600">Loading {plural}...</li>"#)
    } else {
        format!(r#"<div class="col-span-full text-center py-12 text-gray-600">Loading {plural}...</div>"#)
    };
    format!(
        r#"<{tag} id="{id}" class="{class}" data-collection="{collection}" data-kind="{kind}">{placeholder}</{tag}>"#
    )
}

/// Escapes `&`, `<`, `>`, `"` and `'` so user-entered text renders as text.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn navigation(active: Section) -> String {
    let links: String = Section::ALL
        .iter()
        .map(|section| {
            let state = if *section == active {
                "bg-blue-800"
            } else {
                "hover:bg-blue-700"
            };
            format!(
                r#"<a href="{}" class="px-3 py-2 rounded transition-colors {}">{}</a>"#,
                section.href(),
                state,
                section.label()
            )
        })
        .collect();

    format!(
        r#"<nav class="bg-blue-600 text-white shadow-lg">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <div class="flex justify-between h-16">
      <div class="flex items-center"><h1 class="text-xl font-bold">&#127973; Hospital Management System</h1></div>
      <div class="flex items-center space-x-4">{}</div>
    </div>
  </div>
</nav>"#,
        links
    )
}

/// Wraps `body` in a complete HTML document with the navigation bar and the
/// page script.
pub fn document(title: &str, active: Section, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{} - Hospital Management System</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script src="/assets/hospital.js" defer></script>
</head>
<body class="bg-gray-50 min-h-screen">
{}
<main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
  <div class="px-4 py-6 sm:px-0">
{}
  </div>
</main>
</body>
</html>"#,
        escape_html(title),
        navigation(active),
        body
    )
}

/// Page title block with an optional action button that reveals `form_id`.
pub fn header(title: &str, subtitle: &str, action: Option<(&str, &str, &str)>) -> String {
    let button = match action {
        Some((label, form_id, color)) => format!(
            r#"<div class="mt-4 flex md:mt-0 md:ml-4"><button type="button" data-show-form="{}" class="{} text-white px-4 py-2 rounded transition-colors">+ {}</button></div>"#,
            form_id, color, label
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="md:flex md:items-center md:justify-between mb-6">
  <div class="flex-1 min-w-0">
    <h2 class="text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate">{}</h2>
    <p class="mt-1 text-sm text-gray-500">{}</p>
  </div>
  {}
</div>"#,
        title, subtitle, button
    )
}

/// A hidden form panel posting to `endpoint`.
pub struct FormPanel<'a> {
    pub id: &'a str,
    pub heading: &'a str,
    pub endpoint: &'a str,
    pub submit_label: &'a str,
    pub submit_color: &'a str,
    pub success: &'a str,
    pub failure: &'a str,
    pub fields: Vec<String>,
}

impl FormPanel<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<div id="{id}" data-form-panel class="hidden bg-white shadow rounded-lg p-6 mb-6">
  <h3 class="text-lg font-medium text-gray-900 mb-4">{heading}</h3>
  <form data-endpoint="{endpoint}" data-success="{success}" data-failure="{failure}" class="grid grid-cols-1 md:grid-cols-2 gap-4">
    {fields}
    <div class="md:col-span-2 flex space-x-3">
      <button type="submit" class="{color} text-white px-4 py-2 rounded">{submit}</button>
      <button type="button" data-hide-form="{id}" class="bg-gray-300 hover:bg-gray-400 text-gray-700 px-4 py-2 rounded">Cancel</button>
    </div>
  </form>
</div>"#,
            id = self.id,
            heading = self.heading,
            endpoint = self.endpoint,
            success = escape_html(self.success),
            failure = escape_html(self.failure),
            fields = self.fields.concat(),
            color = self.submit_color,
            submit = self.submit_label,
        )
    }
}

const FIELD_CLASS: &str = "w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// A labelled `<input>`. Number inputs are tagged so the script sends integers.
pub fn input_field(id: &str, name: &str, label: &str, input_type: &str, extra: &str) -> String {
    let int_marker = if input_type == "number" {
        r#" data-type="int""#
    } else {
        ""
    };
    format!(
        r#"<div><label for="{id}" class="block text-sm font-medium text-gray-700 mb-1">{label}</label><input id="{id}" name="{name}" type="{input_type}"{int_marker} required class="{FIELD_CLASS}" {extra}></div>"#
    )
}

/// A labelled `<select>` whose first option is an empty placeholder.
///
/// `extra` is copied into the tag, e.g. `data-options` for selects the page
/// script fills from the API.
pub fn select_field(
    id: &str,
    name: &str,
    label: &str,
    placeholder: &str,
    options: &[(String, String)],
    int_valued: bool,
    extra: &str,
) -> String {
    let options: String = options
        .iter()
        .map(|(value, text)| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(value),
                escape_html(text)
            )
        })
        .collect();
    let int_marker = if int_valued { r#" data-type="int""# } else { "" };
    format!(
        r#"<div><label for="{id}" class="block text-sm font-medium text-gray-700 mb-1">{label}</label><select id="{id}" name="{name}"{int_marker} required class="{FIELD_CLASS}" {extra}><option value="">{placeholder}</option>{options}</select></div>"#
    )
}
