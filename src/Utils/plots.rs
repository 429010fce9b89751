use crate::Utils::settings::PlotSettings;
use crate::polynomial::aggregator::Polynomial;
use crate::polynomial::pipeline::EquationReport;
use log::{info, warn};
use plotters::prelude::*;
use std::error::Error;
use std::path::PathBuf;

/// `points` evenly spaced samples of the polynomial on [x_min, x_max], ends included
pub fn sample_polynomial(
    polynomial: &Polynomial,
    x_min: f64,
    x_max: f64,
    points: usize,
) -> Vec<(f64, f64)> {
    if points < 2 {
        return vec![(x_min, polynomial.evaluate(x_min))];
    }
    let step = (x_max - x_min) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = x_min + step * i as f64;
            (x, polynomial.evaluate(x))
        })
        .collect()
}

/// y range of the samples with 5% headroom, never empty
fn y_range(samples: &[(f64, f64)]) -> (f64, f64) {
    let (y_min, y_max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let pad = ((y_max - y_min) * 0.05).max(1.0);
    (y_min - pad, y_max + pad)
}

/// Draws the curve and its real roots into a PNG. Only degree 1 and 2 equations with at least
/// one real root are plotted; Ok(None) otherwise.
pub fn plot_polynomial(
    report: &EquationReport,
    settings: &PlotSettings,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let roots = report.solution.real_roots();
    if !(1..=2).contains(&report.degree) || roots.is_empty() {
        warn!(
            "nothing to plot for degree {} with {} real roots",
            report.degree,
            roots.len()
        );
        return Ok(None);
    }
    let samples = sample_polynomial(
        &report.polynomial,
        settings.x_min,
        settings.x_max,
        settings.points,
    );
    let (y_min, y_max) = y_range(&samples);

    let root_area = BitMapBackend::new(&settings.file, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(report.reduced_form.clone(), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(settings.x_min..settings.x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc("X").y_desc("P(X)").draw()?;

    // axes
    chart.draw_series(LineSeries::new(
        vec![(settings.x_min, 0.0), (settings.x_max, 0.0)],
        &BLACK,
    ))?;
    if settings.x_min < 0.0 && settings.x_max > 0.0 {
        chart.draw_series(LineSeries::new(vec![(0.0, y_min), (0.0, y_max)], &BLACK))?;
    }

    chart
        .draw_series(LineSeries::new(samples, &BLUE))?
        .label(format!("degree {}", report.degree))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(
            roots
                .iter()
                .map(|root| Circle::new((*root, 0.0), 5, RED.filled())),
        )?
        .label("real roots")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root_area.present()?;
    info!("plot saved to {}", settings.file.display());
    Ok(Some(settings.file.clone()))
}
