use super::layout::{document, Section};

struct Feature {
    section: Section,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    color: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        section: Section::Patients,
        icon: "&#128101;",
        title: "Patient Management",
        blurb: "Register new patients and keep their records up to date.",
        color: "bg-blue-500",
    },
    Feature {
        section: Section::Doctors,
        icon: "&#129658;",
        title: "Doctor Directory",
        blurb: "Manage doctor profiles, specializations and availability.",
        color: "bg-green-500",
    },
    Feature {
        section: Section::Appointments,
        icon: "&#128197;",
        title: "Appointment Scheduling",
        blurb: "Book appointments between patients and doctors.",
        color: "bg-purple-500",
    },
];

fn feature_card(feature: &Feature) -> String {
    format!(
        r#"<a href="{href}" class="block bg-white overflow-hidden shadow rounded-lg hover:shadow-md transition-shadow">
  <div class="p-6">
    <div class="w-12 h-12 {color} rounded-md flex items-center justify-center text-white text-2xl">{icon}</div>
    <h3 class="mt-4 text-lg font-medium text-gray-900">{title}</h3>
    <p class="mt-2 text-sm text-gray-500">{blurb}</p>
    <span class="mt-4 inline-block text-sm font-medium text-blue-600">Open {label} &rarr;</span>
  </div>
</a>"#,
        href = feature.section.href(),
        color = feature.color,
        icon = feature.icon,
        title = feature.title,
        blurb = feature.blurb,
        label = feature.section.label(),
    )
}

pub fn render() -> String {
    let cards: String = FEATURES.iter().map(feature_card).collect();
    let body = format!(
        r#"<div class="text-center mb-10">
  <h2 class="text-3xl font-extrabold text-gray-900 sm:text-4xl">Welcome to the Hospital Management System</h2>
  <p class="mt-3 max-w-2xl mx-auto text-lg text-gray-500">Manage patients, doctors and appointments in one place.</p>
</div>
<div class="grid grid-cols-1 md:grid-cols-3 gap-6">{cards}</div>
<p class="mt-10 text-center text-sm text-gray-500">Prefer a single-page experience? Try the <a href="/app/" class="text-blue-600 hover:underline">browser app</a>.</p>"#
    );
    document("Home", Section::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_every_section() {
        let html = render();
        for href in ["/patients", "/doctors", "/appointments"] {
            assert!(html.contains(&format!(r#"<a href="{}" class="block"#, href)));
        }
        assert!(html.contains("Patient Management"));
        assert!(html.contains(r#"href="/app/""#));
    }
}
