/// Shell commands to run a freshly generated project, keyed by the framework label.
///
/// Only labels with a known workflow have entries; everything else yields nothing.
pub fn for_label(label: &str, output_path: &str) -> Vec<String> {
    let run: &[&str] = match label {
        "spring-boot" => &["mvn spring-boot:run"],
        "django" => &[
            "pip install -r requirements.txt",
            "python manage.py runserver",
        ],
        "dotnet" => &["dotnet run"],
        _ => return Vec::new(),
    };

    std::iter::once(format!("cd {}", output_path))
        .chain(run.iter().map(|s| s.to_string()))
        .collect()
}
