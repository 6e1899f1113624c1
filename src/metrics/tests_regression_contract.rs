// =========================================================================
// Regression metrics: bounds, exact values and degenerate inputs.
// =========================================================================

use super::*;

const Y_TRUE: [f64; 4] = [3.0, -0.5, 2.0, 7.0];
const Y_PRED: [f64; 4] = [2.5, 0.0, 2.0, 8.0];

/// R² = 1.0 for perfect predictions
#[test]
fn metrics_r2_perfect() {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];
    let r2 = r_squared(&y, &y).expect("same length");
    assert!((r2 - 1.0).abs() < 1e-12, "R²={r2} for perfect predictions");
}

/// R² < 0 when predictions are worse than the mean
#[test]
fn metrics_r2_negative_for_bad_predictions() {
    let y_true = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y_pred = [10.0, 20.0, 30.0, 40.0, 50.0];
    let r2 = r_squared(&y_pred, &y_true).expect("same length");
    assert!(r2 < 0.0, "R²={r2} >= 0 for terrible predictions");
}

/// A constant target is defined as R² = 0, not a division by zero
#[test]
fn metrics_r2_constant_target_is_zero() {
    let y_true = [4.0, 4.0, 4.0];
    assert_eq!(r_squared(&[4.0, 4.0, 4.0], &y_true), Ok(0.0));
    assert_eq!(r_squared(&[1.0, 9.0, 3.0], &y_true), Ok(0.0));
}

#[test]
fn metrics_known_values() {
    // residuals: 0.5, -0.5, 0.0, -1.0
    assert!((mse(&Y_PRED, &Y_TRUE).expect("ok") - 0.375).abs() < 1e-12);
    assert!((mae(&Y_PRED, &Y_TRUE).expect("ok") - 0.5).abs() < 1e-12);
    assert!((rmse(&Y_PRED, &Y_TRUE).expect("ok") - 0.375_f64.sqrt()).abs() < 1e-12);

    // SS_tot = 29.1875, SS_res = 1.5
    let r2 = r_squared(&Y_PRED, &Y_TRUE).expect("ok");
    assert!((r2 - (1.0 - 1.5 / 29.1875)).abs() < 1e-12);
}

#[test]
fn metrics_rmse_is_sqrt_mse() {
    let m = RegressionMetrics::compute(&Y_PRED, &Y_TRUE).expect("ok");
    assert!((m.rmse * m.rmse - m.mse).abs() < 1e-12);
    assert!(m.mae >= 0.0 && m.mse >= 0.0);
}

#[test]
fn metrics_length_mismatch() {
    let err = mse(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(
        err,
        MatriksError::ShapeMismatch {
            op: "mse",
            left: (2, 1),
            right: (1, 1)
        }
    );
    assert!(RegressionMetrics::compute(&[1.0], &[1.0, 2.0]).is_err());
}

#[test]
fn metrics_empty_input() {
    assert!(matches!(mae(&[], &[]), Err(MatriksError::EmptyInput { .. })));
    assert!(matches!(r_squared(&[], &[]), Err(MatriksError::EmptyInput { .. })));
}

#[test]
fn metrics_serialize_with_display_keys() {
    let m = RegressionMetrics {
        r2: 1.0,
        mse: 0.0,
        rmse: 0.0,
        mae: 0.0,
    };
    let json = serde_json::to_value(m).expect("serialize");
    assert_eq!(json["R2"], 1.0);
    assert!(json.get("MSE").is_some());
    assert!(json.get("RMSE").is_some());
    assert!(json.get("MAE").is_some());
    assert!(json.get("r2").is_none());
}

#[test]
fn metrics_display() {
    let m = RegressionMetrics::compute(&Y_PRED, &Y_TRUE).expect("ok");
    assert!(m.to_string().starts_with("R2: 0.9486, MSE: 0.3750"));
}

#[test]
fn plot_data_series() {
    let plot = PlotData::new(&Y_PRED, &Y_TRUE, &[4.0, 2.0, 1.0]).expect("ok");
    assert_eq!(plot.scatter[0], (3.0, 2.5));
    assert_eq!(plot.scatter.len(), 4);
    assert_eq!(plot.reference_line, [(-0.5, -0.5), (7.0, 7.0)]);
    assert_eq!(plot.loss_curve, vec![(0, 4.0), (1, 2.0), (2, 1.0)]);
}

#[test]
fn plot_data_length_mismatch() {
    assert!(PlotData::new(&[1.0], &[1.0, 2.0], &[]).is_err());
}
