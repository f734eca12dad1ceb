//! Money math shared by the progression engine, scorer and advisor

/// Future value of a principal compounded monthly, plus monthly contributions
pub fn compound_growth(principal: f64, annual_rate: f64, years: f64, monthly_contribution: f64) -> f64 {
    let months = years * 12.0;
    if annual_rate == 0.0 {
        return principal + monthly_contribution * months;
    }

    let monthly_rate = annual_rate / 12.0;
    let factor = (1.0 + monthly_rate).powf(months);

    principal * factor + monthly_contribution * ((factor - 1.0) / monthly_rate)
}

/// Amortized monthly payment for a loan
pub fn monthly_payment(principal: f64, annual_rate: f64, years: f64) -> f64 {
    let payments = years * 12.0;
    if payments <= 0.0 {
        return principal;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / payments;
    }

    let factor = (1.0 + monthly_rate).powf(payments);
    principal * (monthly_rate * factor) / (factor - 1.0)
}

/// Value of `amount` after `years` of annual compounding
#[inline]
pub fn project_growth(amount: f64, annual_rate: f64, years: i32) -> f64 {
    amount * (1.0 + annual_rate).powi(years)
}

/// Format a dollar amount rounded to whole dollars, e.g. `$12,345` or `-$800`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}", sign, grouped)
}
