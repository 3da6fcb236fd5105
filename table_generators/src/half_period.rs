pub const C_ARRAY_NAME: &str = "v";
pub const C_ELEMENT_TYPE: &str = "long";

/// Renders `const long v[] = { a, b, ... };` for pasting into the buzzer sketch.
pub fn render_c_array(values: &[u32]) -> String {
    let joined = values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "const {} {}[] = {{ {} }};",
        C_ELEMENT_TYPE, C_ARRAY_NAME, joined
    )
}
