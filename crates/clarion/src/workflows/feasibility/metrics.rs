//! Numeric primitives: yield, IRR, payback, ROI and cash-flow series.
//!
//! Every ratio is guarded against a zero denominator and none of these
//! functions can fail.

const IRR_INITIAL_GUESS: f64 = 0.1;
const IRR_TOLERANCE: f64 = 0.0001;
const IRR_MAX_ITERATIONS: u32 = 100;
const IRR_RATE_FLOOR: f64 = -0.99;
const IRR_RATE_CEILING: f64 = 1.0;

/// Net initial yield in percent; zero when `price` is zero.
pub fn net_initial_yield(annual_income: f64, price: f64) -> f64 {
    if price == 0.0 {
        return 0.0;
    }
    annual_income / price * 100.0
}

/// Result of the Newton-Raphson IRR search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrSolution {
    /// Percent.
    pub rate: f64,
    pub iterations: u32,
    /// `false` when the search ran out of iterations or hit a flat derivative
    /// before |NPV| fell under tolerance.
    pub converged: bool,
}

/// Solves for the discount rate zeroing the NPV of
/// `[-investment, cf_1, .., cf_n + exit_value]`.
pub fn solve_irr(initial_investment: f64, annual_cash_flows: &[f64], exit_value: f64) -> IrrSolution {
    let flows = investment_cash_flows(initial_investment, annual_cash_flows, exit_value);

    let mut rate = IRR_INITIAL_GUESS;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < IRR_MAX_ITERATIONS {
        iterations += 1;
        let (npv, derivative) = npv_with_derivative(&flows, rate);

        if npv.abs() < IRR_TOLERANCE {
            converged = true;
            break;
        }
        if derivative == 0.0 {
            break;
        }

        rate = (rate - npv / derivative).clamp(IRR_RATE_FLOOR, IRR_RATE_CEILING);
    }

    IrrSolution {
        rate: rate * 100.0,
        iterations,
        converged,
    }
}

/// IRR in percent. Non-convergence returns the last estimate; callers floor
/// negative values before display.
pub fn irr(initial_investment: f64, annual_cash_flows: &[f64], exit_value: f64) -> f64 {
    solve_irr(initial_investment, annual_cash_flows, exit_value).rate
}

/// Net present value of `flows` (index 0 undiscounted) at `rate`.
pub fn npv(flows: &[f64], rate: f64) -> f64 {
    npv_with_derivative(flows, rate).0
}

fn npv_with_derivative(flows: &[f64], rate: f64) -> (f64, f64) {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, derivative), (period, flow)| {
            let t = period as i32;
            let npv = npv + flow / base.powi(t);
            let derivative = if period > 0 {
                derivative - (t as f64 * flow) / base.powi(t + 1)
            } else {
                derivative
            };
            (npv, derivative)
        })
}

/// `[-investment, cf_1, .., cf_n + exit]`; with no annual flows the exit lands
/// on the investment period.
pub fn investment_cash_flows(
    initial_investment: f64,
    annual_cash_flows: &[f64],
    exit_value: f64,
) -> Vec<f64> {
    let mut flows = Vec::with_capacity(annual_cash_flows.len() + 1);
    flows.push(-initial_investment);
    flows.extend_from_slice(annual_cash_flows);
    if let Some(last) = flows.last_mut() {
        *last += exit_value;
    }
    flows
}

/// Years to recover `investment`; `f64::INFINITY` when income is not positive.
pub fn payback(investment: f64, annual_net_income: f64) -> f64 {
    if annual_net_income <= 0.0 {
        return f64::INFINITY;
    }
    investment / annual_net_income
}

/// Percentage return on investment; zero when nothing was invested.
pub fn roi(total_return: f64, total_investment: f64) -> f64 {
    if total_investment == 0.0 {
        return 0.0;
    }
    (total_return - total_investment) / total_investment * 100.0
}

/// Flat series of `years` identical net flows.
pub fn level_cash_flows(annual_net_income: f64, years: usize) -> Vec<f64> {
    vec![annual_net_income; years]
}

/// Running total seeded with `-initial_investment`, one entry per annual flow.
pub fn cumulative_cash_flows(initial_investment: f64, annual_cash_flows: &[f64]) -> Vec<f64> {
    annual_cash_flows
        .iter()
        .scan(-initial_investment, |cumulative, flow| {
            *cumulative += flow;
            Some(*cumulative)
        })
        .collect()
}
