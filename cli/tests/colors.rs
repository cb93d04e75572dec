use filmpath::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    assert!(colors.person_name("Tom Cruise").contains("Tom Cruise"));
    assert!(colors.film_title("Top Gun").contains("Top Gun"));
    assert!(colors.url("https://www.imdb.com/").contains("imdb.com"));
    assert!(colors.success("found").contains("found"));
    assert!(colors.error("failed").contains("failed"));
    assert!(colors.step_number("1.").contains("1."));
    assert!(colors.number("42").contains("42"));
    assert!(colors.stats("stats").contains("stats"));
    assert!(colors.muted("skipped").contains("skipped"));
}

#[test]
fn test_color_scheme_without_colors() {
    let colors = ColorScheme::new(false);

    assert_eq!(colors.person_name("Tom Cruise").to_string(), "Tom Cruise");
    assert_eq!(colors.film_title("Top Gun").to_string(), "Top Gun");
    assert_eq!(colors.number("42").to_string(), "42");
}
