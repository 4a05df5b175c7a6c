/// quick start - minimal example to get started
use loan_origination_rs::{
    Customer, LoanOriginationService, LoanStore, MemoryStore, Money, NewLoan, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();

    // register a customer earning 100,000 per month
    let customer = Customer::new("Asha", "Verma", "9876500001", 31, Money::from_major(100_000));
    println!("approved limit: {}", customer.approved_limit());
    let customer_id = store.insert_customer(customer)?;

    // seed some loan history so the customer has a score
    for _ in 0..6 {
        let loan = NewLoan::new(
            customer_id,
            Money::from_major(50_000),
            Rate::from_percentage(12),
            12,
            Money::from_major(1_000),
            chrono::Utc::now(),
        );
        store.insert_loan(loan)?;
    }

    // request 120,000 over 12 months at 10%
    let mut service = LoanOriginationService::new(store);
    let outcome = service.originate_now(
        customer_id,
        Money::from_major(120_000),
        Rate::from_percentage(10),
        12,
    )?;

    println!("approved: {}", outcome.approved);
    println!("rate: {}", outcome.corrected_rate);
    if let Some(installment) = outcome.monthly_installment {
        println!("monthly installment: {}", installment);
    }

    Ok(())
}
