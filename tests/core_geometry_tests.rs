use easel_rs::core::{
    AspectRatioSelector, Dimensions, PaperSizeSelector, fit_print, resolve_oriented_dimensions,
    resolve_paper, resolve_ratio,
};

const CUSTOM_PAPER: Dimensions = Dimensions::new(8.0, 10.0);
const CUSTOM_RATIO: Dimensions = Dimensions::new(3.0, 2.0);

#[test]
fn landscape_sheet_centers_a_35mm_frame() {
    let oriented = resolve_oriented_dimensions(
        PaperSizeSelector::EightByTen,
        CUSTOM_PAPER,
        true,
        AspectRatioSelector::ThirtyFiveMm,
        CUSTOM_RATIO,
        false,
    );
    assert_eq!(oriented.paper, Dimensions::new(10.0, 8.0));
    assert_eq!(oriented.ratio, Dimensions::new(3.0, 2.0));

    let print = fit_print(oriented.paper, oriented.ratio, 0.5);
    assert!((print.width - 9.0).abs() <= 1e-9);
    assert!((print.height - 6.0).abs() <= 1e-9);
}

#[test]
fn portrait_sheet_with_flipped_ratio_fills_the_long_axis() {
    let paper = resolve_paper(PaperSizeSelector::EightByTen, CUSTOM_PAPER, false);
    assert_eq!(paper, Dimensions::new(8.0, 10.0));
    let ratio = resolve_ratio(AspectRatioSelector::ThirtyFiveMm, CUSTOM_RATIO, paper, true);
    assert_eq!(ratio, Dimensions::new(2.0, 3.0));

    let print = fit_print(paper, ratio, 0.5);
    assert!((print.width - 6.0).abs() <= 1e-9);
    assert!((print.height - 9.0).abs() <= 1e-9);
}

#[test]
fn unflipped_ratio_on_a_portrait_sheet_is_width_bound() {
    let paper = Dimensions::new(8.0, 10.0);
    let print = fit_print(paper, Dimensions::new(3.0, 2.0), 0.5);
    assert!((print.width - 7.0).abs() <= 1e-9);
    assert!((print.height - 7.0 / 1.5).abs() <= 1e-9);
}

#[test]
fn even_borders_prints_a_uniform_reduction_of_the_sheet() {
    let paper = Dimensions::new(10.0, 8.0);
    let ratio = resolve_ratio(AspectRatioSelector::EvenBorders, CUSTOM_RATIO, paper, false);
    assert_eq!(ratio, paper);

    let print = fit_print(paper, ratio, 0.5);
    assert!((print.width - 8.75).abs() <= 1e-9);
    assert!((print.height - 7.0).abs() <= 1e-9);

    let width_scale = print.width / paper.width;
    let height_scale = print.height / paper.height;
    assert!((width_scale - height_scale).abs() <= 1e-9);
}

#[test]
fn exact_ratio_match_fills_the_available_area() {
    let print = fit_print(Dimensions::new(10.0, 8.0), Dimensions::new(3.0, 2.0), 2.0);
    assert!((print.width - 6.0).abs() <= 1e-9);
    assert!((print.height - 4.0).abs() <= 1e-9);
}

#[test]
fn zero_minimum_border_lets_the_print_fill_the_sheet() {
    let paper = Dimensions::new(10.0, 8.0);
    let print = fit_print(paper, paper, 0.0);
    assert!((print.width - paper.width).abs() <= 1e-9);
    assert!((print.height - paper.height).abs() <= 1e-9);
}

#[test]
fn degenerate_inputs_produce_no_print() {
    let ratio = Dimensions::new(3.0, 2.0);
    assert!(fit_print(Dimensions::new(0.0, 10.0), ratio, 0.5).is_degenerate());
    assert!(fit_print(Dimensions::new(8.0, -10.0), ratio, 0.5).is_degenerate());
    assert!(fit_print(Dimensions::new(8.0, 10.0), Dimensions::new(0.0, 2.0), 0.5).is_degenerate());
    assert!(fit_print(Dimensions::new(8.0, 10.0), ratio, 4.0).is_degenerate());
    assert!(fit_print(Dimensions::new(8.0, 10.0), ratio, f64::NAN).is_degenerate());
    assert!(fit_print(Dimensions::new(f64::INFINITY, 10.0), ratio, 0.5).is_degenerate());
}

#[test]
fn custom_selectors_pass_their_dimensions_through() {
    let paper = resolve_paper(PaperSizeSelector::Custom, Dimensions::new(14.0, 6.0), false);
    assert_eq!(paper, Dimensions::new(14.0, 6.0));
    let swapped = resolve_paper(PaperSizeSelector::Custom, Dimensions::new(14.0, 6.0), true);
    assert_eq!(swapped, Dimensions::new(6.0, 14.0));

    let ratio = resolve_ratio(
        AspectRatioSelector::Custom,
        Dimensions::new(1.85, 1.0),
        paper,
        false,
    );
    assert_eq!(ratio, Dimensions::new(1.85, 1.0));
}

#[test]
fn panoramic_ratio_on_a_wide_sheet() {
    let oriented = resolve_oriented_dimensions(
        PaperSizeSelector::Custom,
        Dimensions::new(14.0, 6.0),
        false,
        AspectRatioSelector::Xpan,
        CUSTOM_RATIO,
        false,
    );
    assert_eq!(oriented.ratio, Dimensions::new(65.0, 24.0));

    let print = fit_print(oriented.paper, oriented.ratio, 0.5);
    let target = 65.0 / 24.0;
    assert!((print.width / print.height - target).abs() <= 1e-9);
    assert!(print.width <= oriented.paper.width - 1.0 + 1e-9);
    assert!(print.height <= oriented.paper.height - 1.0 + 1e-9);
}
