use pretty_assertions::assert_eq;
use tones::{Note, SCALE, half_periods};

use crate::half_period::render_c_array;

#[test]
fn scale_renders_as_the_buzzer_initializer() {
    assert_eq!(
        render_c_array(&half_periods(&SCALE)),
        "const long v[] = { 3822, 3405, 3033, 2863, 2551, 2272, 2024, 1911 };"
    );
}

#[test]
fn values_are_comma_separated_in_order() {
    let notes = [Note::new("A4", 440.0), Note::new("A5", 880.0)];
    assert_eq!(
        render_c_array(&half_periods(&notes)),
        "const long v[] = { 1136, 568 };"
    );
}

#[test]
fn single_value_has_no_separator() {
    assert_eq!(render_c_array(&[2000]), "const long v[] = { 2000 };");
}

#[test]
fn empty_table() {
    assert_eq!(render_c_array(&[]), "const long v[] = {  };");
}
