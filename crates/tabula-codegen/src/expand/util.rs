use proc_macro2::Span;

/// Builds an identifier from arbitrary text.
///
/// Characters that cannot appear in an identifier become `_`, a leading
/// digit gets a `_` prefix and keywords become raw identifiers.
pub(crate) fn ident(name: &str) -> syn::Ident {
    let mut name: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if name.chars().all(|c| c == '_') {
        name.insert_str(0, "column");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    match name.as_str() {
        // Cannot be raw identifiers
        "self" | "Self" | "super" | "crate" => syn::Ident::new(&format!("{name}_"), Span::call_site()),
        _ if syn::parse_str::<syn::Ident>(&name).is_err() => syn::Ident::new_raw(&name, Span::call_site()),
        _ => syn::Ident::new(&name, Span::call_site()),
    }
}

/// Returns `name`, suffixed with a counter if it was already handed out.
pub(crate) fn unique(name: &str, taken: &mut Vec<String>) -> String {
    let mut candidate = name.to_string();
    let mut n = 2;

    while taken.contains(&candidate) {
        candidate = format!("{name}_{n}");
        n += 1;
    }

    taken.push(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers() {
        assert_eq!(ident("email").to_string(), "email");
        assert_eq!(ident("created_at").to_string(), "created_at");
    }

    #[test]
    fn keywords_become_raw() {
        assert_eq!(ident("type").to_string(), "r#type");
        assert_eq!(ident("match").to_string(), "r#match");
        assert_eq!(ident("self").to_string(), "self_");
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(ident("2fa").to_string(), "_2fa");
        assert_eq!(ident("e-mail").to_string(), "e_mail");
        assert_eq!(ident("_").to_string(), "column_");
    }

    #[test]
    fn unique_names() {
        let mut taken = vec![];
        assert_eq!(unique("id", &mut taken), "id");
        assert_eq!(unique("id", &mut taken), "id_2");
        assert_eq!(unique("id", &mut taken), "id_3");
    }
}
