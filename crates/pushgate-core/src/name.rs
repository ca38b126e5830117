/// Characters git drops from the start and end of `user.name`.
const CRUD: &[char] = &['\\', '.', ',', ':', ';', '"', '\''];

/// Normalizes a display name the way git normalizes `user.name` when it writes a commit.
///
/// A trailing `<...>` segment (an address appended to the name) is dropped together
/// with the whitespace before it. Every other `<`, `>` and newline is removed as a
/// single character, so `Jane <Admin> Doe` becomes `Jane Admin Doe` as git records it.
/// Finally leading and trailing runs of `\ . , : ; " '` are stripped. Without this a
/// hosted account named `"Doe, John."` could never match the committer `Doe, John`.
#[must_use]
pub fn sanitize_name(name: Option<&str>) -> Option<String> {
    let name = without_trailing_address(name?);

    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\n'))
        .collect();

    Some(
        cleaned
            .trim_start_matches(CRUD)
            .trim_end_matches(CRUD)
            .to_string(),
    )
}

fn without_trailing_address(name: &str) -> &str {
    if !name.ends_with('>') {
        return name;
    }
    match name.rfind('<') {
        Some(open) => name[..open].trim_end(),
        None => name,
    }
}
