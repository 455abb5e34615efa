/// Characters that break shell or `${{ }}` interpolation when an output is
/// pasted into a `run:` step, e.g. `echo "TITLE=${{ steps.pr.outputs.title }}"`.
const UNSAFE_CHARS: [char; 7] = ['\'', '"', '`', '(', ')', '[', ']'];

/// Strips every shell-unsafe character from `text`, keeping everything else
/// (whitespace and unicode included) in order.
pub fn sanitize(text: Option<&str>) -> Option<String> {
    text.map(|text| text.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect())
}
