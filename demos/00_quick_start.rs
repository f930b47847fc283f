/// quick start - one calculation straight through the calculator
use mortgage_calculator_rs::{calculate, Decimal, Money, MortgageInput, MortgageType, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // £300,000 over 25 years at 5.25%
    let input = MortgageInput::new(
        Money::from_major(300_000),
        Rate::from_percentage(Decimal::new(525, 2)),
        25,
        MortgageType::Repayment,
    );

    let quote = calculate(&input)?;
    println!("monthly: £{}", quote.monthly_payment.display(2));
    println!("total:   £{}", quote.total_payment.display(2));

    Ok(())
}
