//! Skill logo and placeholder image lookup.

/// Known skill-name to logo-URL pairs. Checked before falling back to the
/// simple-icons CDN guess.
const SKILL_LOGOS: &[(&str, &str)] = &[
    // Tech stack
    ("Python", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"),
    ("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    ("Node.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg"),
    ("Flask", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg"),
    ("HTML5", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    ("HTML", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    ("CSS3", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"),
    ("CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"),
    ("JavaScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"),
    ("TypeScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg"),
    ("Vue", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg"),
    ("Django", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg"),
    ("SQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"),
    ("SQLAlchemy", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"),
    ("Web Security", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/owasp.svg"),
    ("Cloud Security", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg"),
    ("Penetration Testing", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/hackthebox.svg"),
    // Tools
    ("Nmap", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/nmap.svg"),
    ("Wireshark", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/wireshark.svg"),
    ("Metasploit", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/metasploit.svg"),
    ("Kali Linux", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/kalilinux.svg"),
    ("Grafana", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/grafana.svg"),
    ("Burp Suite", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/burpsuite.svg"),
    ("Burp", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/burpsuite.svg"),
    ("Git", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg"),
    ("Docker", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg"),
    ("AWS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg"),
    ("Jenkins", "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/jenkins.svg"),
];

/// Resolve a logo URL for a skill.
///
/// A custom icon wins when it is itself a URL; otherwise the lookup table is
/// checked exactly, then case-insensitively, and finally the simple-icons CDN
/// naming convention is guessed.
pub fn skill_logo(name: &str, custom_icon: Option<&str>) -> String {
    if let Some(icon) = custom_icon {
        if icon.starts_with("http") {
            return icon.to_string();
        }
    }

    if let Some((_, url)) = SKILL_LOGOS.iter().find(|(key, _)| *key == name) {
        return url.to_string();
    }

    let lower = name.to_lowercase();
    if let Some((_, url)) = SKILL_LOGOS
        .iter()
        .find(|(key, _)| key.to_lowercase() == lower)
    {
        return url.to_string();
    }

    let compact: String = lower.split_whitespace().collect();
    format!("https://simpleicons.org/icons/{}.svg", compact)
}

/// Placeholder image for project cards without an image of their own.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "https://via.placeholder.com/400x200?text={}",
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_url_icon_wins() {
        let url = skill_logo("Python", Some("https://example.com/py.svg"));
        assert_eq!(url, "https://example.com/py.svg");
    }

    #[test]
    fn non_url_icon_falls_through_to_table() {
        let url = skill_logo("Python", Some("\u{1F40D}"));
        assert!(url.contains("devicons"));
    }

    #[test]
    fn case_insensitive_match() {
        assert_eq!(skill_logo("python", None), skill_logo("Python", None));
        assert_eq!(skill_logo("burp suite", None), skill_logo("Burp Suite", None));
    }

    #[test]
    fn unknown_skill_guesses_simple_icons() {
        assert_eq!(
            skill_logo("Ghidra Pro", None),
            "https://simpleicons.org/icons/ghidrapro.svg"
        );
    }

    #[test]
    fn placeholder_encodes_title() {
        assert_eq!(
            placeholder_image("My App & Co"),
            "https://via.placeholder.com/400x200?text=My%20App%20%26%20Co"
        );
    }
}
