use serde::{Deserialize, Serialize};

// GitHub API response structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub html_url: String,
}

/// Devicon logo URL for a primary language, when one is known.
pub fn language_logo(language: &str) -> Option<&'static str> {
    // MySQL stands in for the SQL dialects, which have no devicon entry
    let url = match language {
        "JavaScript" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
        "TypeScript" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
        "Python" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        "Java" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
        "C" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/c/c-original.svg",
        "C++" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cplusplus/cplusplus-original.svg",
        "C#" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/csharp/csharp-original.svg",
        "PHP" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/php/php-original.svg",
        "Ruby" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/ruby/ruby-original.svg",
        "Go" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/go/go-original.svg",
        "Rust" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg",
        "Kotlin" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kotlin/kotlin-original.svg",
        "Swift" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/swift/swift-original.svg",
        "HTML" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg",
        "CSS" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg",
        "Dart" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dart/dart-original.svg",
        "SCSS" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sass/sass-original.svg",
        "SQL" | "TSQL" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        "Vue" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg",
        "PowerShell" => "https://upload.wikimedia.org/wikipedia/commons/2/2f/PowerShell_5.0_icon.png",
        _ => return None,
    };
    Some(url)
}
