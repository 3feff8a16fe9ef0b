use calamo::{
    ConvertOptions, ConvertResult, MarkdownConverter, NoopScanner, RenderOptions,
    RendererInitOptions, TitleItem, convert_markdown_to_html,
};

fn load_fixture() -> &'static str {
    include_str!("fixtures/feature_tour.md")
}

#[test]
fn fixture_produces_sequential_titles_in_document_order() {
    let markdown = load_fixture();
    let result = convert_markdown_to_html(markdown, &ConvertOptions::default()).expect("convert");

    let titles: Vec<(&str, &str, u8)> = result
        .title_list
        .iter()
        .map(|item| (item.url.as_str(), item.title.as_str(), item.level))
        .collect();
    assert_eq!(
        titles,
        vec![
            ("#0", "Release notes", 1),
            ("#1", "Rendering pipeline", 2),
            ("#2", "Observability", 3),
        ]
    );

    for (index, item) in result.title_list.iter().enumerate() {
        assert!(result.html.contains(&format!("id=\"{index}\"")));
        assert!(item.url.ends_with(&index.to_string()));
    }
}

#[test]
fn fixture_reading_stats_are_exact_and_rounded_up() {
    let markdown = load_fixture();
    let result = convert_markdown_to_html(markdown, &ConvertOptions::default()).expect("convert");

    assert_eq!(result.reading_time.chars, markdown.chars().count());
    assert!(result.reading_time.words > 0);
    assert_eq!(result.reading_time.minutes, 1);
}

#[test]
fn minimal_document_matches_documented_example() {
    let content = "# Title\n\nSome text.";
    let mut converter = MarkdownConverter::new();
    let html = converter
        .init(&RendererInitOptions::default())
        .render(content, &RenderOptions::default())
        .expect("render");

    assert!(html.contains("id=\"0\""));
    assert!(html.contains("data-heading"));

    let result = converter.get_result();
    assert_eq!(
        result.title_list,
        vec![TitleItem {
            url: "#0".to_string(),
            title: "Title".to_string(),
            level: 1,
        }]
    );
    assert_eq!(result.reading_time.chars, content.chars().count());
    assert_eq!(result.reading_time.minutes, 1);
}

#[test]
fn render_before_init_fails_without_mutating_state() {
    let mut converter = MarkdownConverter::new();
    converter
        .render(load_fixture(), &RenderOptions::default())
        .expect_err("render must require init");

    assert_eq!(converter.get_result(), ConvertResult::default());
}

#[test]
fn reset_returns_to_empty_state_regardless_of_history() {
    let mut converter = MarkdownConverter::new();
    converter
        .init(&RendererInitOptions::default())
        .render(load_fixture(), &RenderOptions::default())
        .expect("render");

    converter.reset();
    let result = converter.get_result();

    assert_eq!(result.html, "");
    assert_eq!(result.reading_time.chars, 0);
    assert_eq!(result.reading_time.words, 0);
    assert_eq!(result.reading_time.minutes, 0);
    assert!(result.title_list.is_empty());
}

#[test]
fn word_count_banner_is_controlled_per_call() {
    let mut converter = MarkdownConverter::new();
    converter.init(&RendererInitOptions::default());

    let with_banner = converter
        .render(load_fixture(), &RenderOptions::default())
        .expect("render");
    assert!(with_banner.contains("reading-meta"));
    assert!(with_banner.contains("min read"));

    let without_banner = converter
        .render(
            load_fixture(),
            &RenderOptions {
                is_count_status: Some(false),
                ..RenderOptions::default()
            },
        )
        .expect("render");
    assert!(!without_banner.contains("reading-meta"));
}

#[test]
fn citations_decorate_external_links_on_demand() {
    let result = convert_markdown_to_html(
        load_fixture(),
        &ConvertOptions {
            is_cite_status: Some(true),
            ..ConvertOptions::default()
        },
    )
    .expect("convert");

    assert!(result.html.contains("footnote-ref"));
    assert!(result.html.contains("References"));
    assert!(result.html.contains("https://www.rust-lang.org"));
}

#[test]
fn image_legend_follows_the_selected_mode() {
    let captioned =
        convert_markdown_to_html(load_fixture(), &ConvertOptions::default()).expect("convert");
    assert!(captioned.html.contains("<figcaption"));
    assert!(captioned.html.contains("architecture overview"));

    let bare = convert_markdown_to_html(
        load_fixture(),
        &ConvertOptions {
            legend: Some(calamo::Legend::None),
            ..ConvertOptions::default()
        },
    )
    .expect("convert");
    assert!(!bare.html.contains("figcaption"));
}

#[test]
fn code_block_chrome_follows_flags() {
    let styled = convert_markdown_to_html(
        load_fixture(),
        &ConvertOptions {
            is_mac_code_block: Some(true),
            ..ConvertOptions::default()
        },
    )
    .expect("convert");
    assert!(styled.html.contains("mac-sign"));
    assert!(styled.html.contains("syntax-lang-rust"));
    assert!(styled.html.contains("code-line"));

    let plain = convert_markdown_to_html(
        load_fixture(),
        &ConvertOptions {
            is_show_line_number: Some(false),
            ..ConvertOptions::default()
        },
    )
    .expect("convert");
    assert!(!plain.html.contains("mac-sign"));
    assert!(!plain.html.contains("code-line"));
}

#[test]
fn one_shot_helper_matches_manual_lifecycle() {
    let markdown = load_fixture();
    let one_shot =
        convert_markdown_to_html(markdown, &ConvertOptions::default()).expect("convert");

    let mut converter = MarkdownConverter::new();
    converter
        .init(&RendererInitOptions::default())
        .render(markdown, &RenderOptions::default())
        .expect("render");

    assert_eq!(one_shot, converter.get_result());
}

#[test]
fn missing_structural_capability_yields_empty_titles() {
    let mut converter = MarkdownConverter::with_scanner(Box::new(NoopScanner));
    let html = converter
        .init(&RendererInitOptions::default())
        .render(load_fixture(), &RenderOptions::default())
        .expect("render");

    assert!(converter.get_result().title_list.is_empty());
    assert!(!html.contains("id=\"0\""));
}
