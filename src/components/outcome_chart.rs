use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

/// One share of the recruitment funnel, in percent of all leads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub label: &'static str,
    pub share: f64,
    pub color: (u8, u8, u8),
}

/// Lead outcomes under conventional online-only recruitment.
pub const BEFORE_PROGRAM: &[Outcome] = &[
    Outcome { label: "Unqualified leads", share: 85.0, color: (254, 202, 202) },
    Outcome { label: "Contacted but lost", share: 13.0, color: (252, 165, 165) },
    Outcome { label: "Enrolled", share: 2.0, color: (220, 38, 38) },
];

/// Lead outcomes with community outreach and nurse-led pre-screening.
pub const WITH_PROGRAM: &[Outcome] = &[
    Outcome { label: "Unqualified leads", share: 30.0, color: (167, 243, 208) },
    Outcome { label: "Contacted but lost", share: 20.0, color: (110, 231, 183) },
    Outcome { label: "Enrolled", share: 50.0, color: (16, 185, 129) },
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub outcomes: &'static [Outcome],
}

#[function_component(OutcomeChart)]
pub fn outcome_chart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let outcomes = props.outcomes;
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                // Set canvas size explicitly before handing it to plotters
                canvas.set_width(360);
                canvas.set_height(320);

                if let Some(backend) = CanvasBackend::with_canvas_object(canvas) {
                    let root = backend.into_drawing_area();
                    let _ = root.fill(&WHITE);

                    let sizes: Vec<f64> = outcomes.iter().map(|o| o.share).collect();
                    let colors: Vec<RGBColor> = outcomes
                        .iter()
                        .map(|o| RGBColor(o.color.0, o.color.1, o.color.2))
                        .collect();
                    let labels: Vec<String> =
                        outcomes.iter().map(|o| o.label.to_string()).collect();

                    let center = (180, 160);
                    let radius = 110.0;
                    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
                    pie.start_angle(-90.0);
                    pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
                    pie.percentages(("sans-serif", 13).into_font().color(&BLACK));
                    let _ = root.draw(&pie);
                    let _ = root.present();
                }
            }
            || ()
        }, outcomes);
    }

    html! {
        <div class="outcome-chart">
            <canvas
                ref={canvas_ref}
                width="360"
                height="320"
                style="max-width: 100%;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn total_share(outcomes: &[Outcome]) -> f64 {
        outcomes.iter().map(|o| o.share).sum()
    }

    #[test]
    fn share_tables_cover_the_whole_funnel() {
        assert_eq!(total_share(BEFORE_PROGRAM), 100.0);
        assert_eq!(total_share(WITH_PROGRAM), 100.0);
    }

    #[test]
    fn tables_describe_the_same_outcomes_in_the_same_order() {
        let before: Vec<_> = BEFORE_PROGRAM.iter().map(|o| o.label).collect();
        let with: Vec<_> = WITH_PROGRAM.iter().map(|o| o.label).collect();
        assert_eq!(before, with);
    }

    #[test]
    fn every_slice_is_drawable() {
        for outcome in BEFORE_PROGRAM.iter().chain(WITH_PROGRAM) {
            assert!(outcome.share > 0.0, "empty slice: {}", outcome.label);
        }
    }
}
