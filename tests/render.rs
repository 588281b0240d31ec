use markup_vars::{
    install, Context, Error, Options, PlainHost, Recorder, Severity, VariableError,
};
use std::sync::Arc;

const SIMPLE_DATA: &str = r#"
simple = "my simple value"
rich = { url = "https://github.com", abbr = "GH", label = "GitHub" }
richWithoutShort = { label = "Rich Without Short", url = "https://www.youtube.com/watch?v=378f9Tx5BYM" }
richWithoutLink = { label = "Rich Without Link", abbr = "EWU" }
"#;

const ADVANCED_DATA: &str = r#"
since = "1948"
who = { url = "https://www.who.int", abbr = "WHO", label = "World Health Organization" }
"#;

fn data(toml_str: &str) -> toml::Table {
    toml::from_str(toml_str).unwrap()
}

fn host_with(options: Options, recorder: &Recorder) -> PlainHost {
    let ctx = Context::builder()
        .with_options(options)
        .with_diagnostics(recorder.clone())
        .build()
        .unwrap();
    let mut host = PlainHost::new();
    markup_vars::install_context(&mut host, Arc::new(ctx));
    host
}

fn render(options: Options, src: &str) -> Result<String, VariableError> {
    let mut host = PlainHost::new();
    install(&mut host, options).unwrap();
    host.render(src)
}

#[test]
fn test_scenario_a_simple_variable() {
    let options = Options::new(data(r#"simple = "hi""#));
    assert_eq!(render(options, "#{simple}").unwrap(), "hi");
}

#[test]
fn test_scenario_b_link() {
    let options = Options::new(data(
        r#"x = { label = "GitHub", url = "https://github.com" }"#,
    ));
    assert_eq!(
        render(options, "#{x|link}").unwrap(),
        r#"<a href="https://github.com">GitHub</a>"#
    );
}

#[test]
fn test_scenario_c_abbreviation() {
    let options = Options::new(data(r#"x = { label = "GitHub", abbr = "GH" }"#));
    assert_eq!(
        render(options, "#{x|abbr}").unwrap(),
        r#"<abbr title="GitHub">GH</abbr>"#
    );
}

#[test]
fn test_scenario_d_missing_variable_under_error() {
    let options = Options::new(data(SIMPLE_DATA)).with_severity(Severity::Error);
    assert_eq!(
        render(options.clone(), "#{missing}"),
        Err(VariableError::UnknownVariable {
            key: "missing".into()
        })
    );

    let recorder = Recorder::new();
    let host = host_with(options.with_ignore_missing_variables(true), &recorder);
    assert_eq!(host.render("#{missing}").unwrap(), "#{missing}");
    assert_eq!(recorder.warnings().len(), 1);
}

#[test]
fn test_scenario_e_missing_abbreviation_under_warn() {
    let recorder = Recorder::new();
    let host = host_with(
        Options::new(data(r#"x = { label = "GitHub" }"#)).with_severity(Severity::Warn),
        &recorder,
    );
    assert_eq!(host.render("#{x|abbr}").unwrap(), "GitHub");
    assert_eq!(
        recorder.warnings(),
        vec![VariableError::MissingAbbreviation { key: "x".into() }]
    );
}

#[test]
fn test_mixed_text() {
    let options = Options::new(data(SIMPLE_DATA));
    assert_eq!(
        render(options, "Includes #{simple} and #{rich|link}").unwrap(),
        r#"Includes my simple value and <a href="https://github.com">GitHub</a>"#
    );
}

#[test]
fn test_aliases_and_nesting() {
    let expected = r#"Includes <a href="https://github.com"><abbr title="GitHub">GH</abbr></a>"#;
    for src in [
        "Includes #{rich|link|abbr}",
        "Includes #{rich|abbr|link}",
        "Includes #{rich|#|-}",
        "Includes #{rich|-|link|abbr|#}",
    ] {
        let options = Options::new(data(SIMPLE_DATA));
        assert_eq!(render(options, src).unwrap(), expected, "{src}");
    }
}

#[test]
fn test_advanced_example() {
    let src = "Founded in #{since}, #{who|#} is the United Nations agency. \
               #{who|-} leads global efforts.";
    let expected = "Founded in 1948, <a href=\"https://www.who.int\">World Health Organization</a> \
                    is the United Nations agency. \
                    <abbr title=\"World Health Organization\">WHO</abbr> leads global efforts.";
    let options = Options::new(data(ADVANCED_DATA));
    assert_eq!(render(options, src).unwrap(), expected);
}

#[test]
fn test_simple_variable_is_verbatim_under_every_severity() {
    for severity in [Severity::Error, Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(
            render(options, "#{simple}").unwrap(),
            "my simple value"
        );
    }
}

#[test]
fn test_unknown_variable_falls_back_under_lower_severity() {
    for severity in [Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(
            render(options, "Includes #{inexistant|link}").unwrap(),
            "Includes #{inexistant|link}"
        );
    }
}

#[test]
fn test_modifier_on_simple_variable() {
    let src = "Includes #{simple|abbr}";
    let options = Options::new(data(SIMPLE_DATA)).with_severity(Severity::Error);
    assert!(matches!(
        render(options, src),
        Err(VariableError::UnexpectedModifier { .. })
    ));

    for severity in [Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(render(options, src).unwrap(), "Includes my simple value");
    }
}

#[test]
fn test_link_without_url() {
    let src = "Includes #{richWithoutLink|link}";
    let options = Options::new(data(SIMPLE_DATA)).with_severity(Severity::Error);
    assert!(matches!(
        render(options, src),
        Err(VariableError::MissingUrl { .. })
    ));

    for severity in [Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(render(options, src).unwrap(), "Includes Rich Without Link");
    }
}

#[test]
fn test_abbr_without_short_form() {
    let src = "Includes #{richWithoutShort|abbr}";
    let options = Options::new(data(SIMPLE_DATA)).with_severity(Severity::Error);
    assert!(matches!(
        render(options, src),
        Err(VariableError::MissingAbbreviation { .. })
    ));

    for severity in [Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(render(options, src).unwrap(), "Includes Rich Without Short");
    }
}

#[test]
fn test_unterminated_reference_is_literal() {
    for severity in [Severity::Error, Severity::Warn, Severity::Silent] {
        let options = Options::new(data(SIMPLE_DATA)).with_severity(severity);
        assert_eq!(
            render(options, "a #{simple} b #{missing|link").unwrap(),
            "a my simple value b #{missing|link"
        );
    }
}

#[test]
fn test_class_name_wraps_every_replacement() {
    let options = Options::new(data(SIMPLE_DATA)).with_class_name("sampleclass");
    assert_eq!(
        render(options, "#{simple} #{rich|abbr} #{nope}").unwrap(),
        r#"<span class="sampleclass">my simple value</span> <span class="sampleclass"><abbr title="GitHub">GH</abbr></span> #{nope}"#
    );
}

#[test]
fn test_warnings_are_captured_not_silent() {
    let warn = Recorder::new();
    let host = host_with(Options::new(data(SIMPLE_DATA)), &warn);
    host.render("#{nope} #{simple|link} #{richWithoutLink|#}").unwrap();
    let kinds: Vec<_> = warn.warnings().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec!["unknown_variable", "unexpected_modifier", "missing_url"]
    );

    let silent = Recorder::new();
    let host = host_with(
        Options::new(data(SIMPLE_DATA)).with_severity(Severity::Silent),
        &silent,
    );
    host.render("#{nope} #{simple|link}").unwrap();
    assert!(silent.is_empty());
}

#[test]
fn test_context_is_reused_across_renders() {
    let mut host = PlainHost::new();
    install(&mut host, Options::new(data(ADVANCED_DATA))).unwrap();
    assert_eq!(host.render("#{since}").unwrap(), "1948");
    assert_eq!(host.render("#{since}!").unwrap(), "1948!");
}

#[test]
fn test_installation_requires_data() {
    for severity in [Severity::Error, Severity::Warn, Severity::Silent] {
        let mut host = PlainHost::new();
        let options = Options::default().with_severity(severity);
        assert!(matches!(
            install(&mut host, options),
            Err(Error::MissingConfiguration)
        ));
    }
}

#[test]
fn test_rejected_entries_leave_text_untouched() {
    let options = Options::new(data("n = 5\nflag = true")).with_severity(Severity::Silent);
    assert_eq!(render(options, "#{n} and #{flag}").unwrap(), "#{n} and #{flag}");
}

#[test]
fn test_invalid_entry_fails_installation_under_error() {
    let mut host = PlainHost::new();
    let options = Options::new(data("ok = \"x\"\nn = 5")).with_severity(Severity::Error);
    assert!(matches!(
        install(&mut host, options),
        Err(Error::Variable(VariableError::UnknownVariableType { .. }))
    ));
}

#[test]
fn test_non_string_label_is_a_structured_variable() {
    let options = Options::new(data("x = { label = 1948, abbr = 48 }\nok = \"y\""))
        .with_severity(Severity::Error);
    let mut host = PlainHost::new();
    let ctx = install(&mut host, options).unwrap();

    assert_eq!(ctx.lexicon().len(), 2);
    assert_eq!(host.render("#{x} #{ok}").unwrap(), "1948 y");
    assert_eq!(
        host.render("#{x|abbr}").unwrap(),
        r#"<abbr title="1948">48</abbr>"#
    );
}
