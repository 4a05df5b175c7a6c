/// seed the store from CSV exports, then originate against the history
use loan_origination_rs::{BatchLoader, LoanOriginationService, MemoryStore, Money, Rate};

const CUSTOMERS: &str = "\
first_name,last_name,phone_number,age,monthly_salary
Meera,Shah,9876500003,29,60000
Nikhil,Rao,9876500004,35,90000
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();

    let loader = BatchLoader::new(&store);
    let summary = loader.load_customers(CUSTOMERS.as_bytes())?;
    println!("customers: {} inserted, {} rejected", summary.inserted, summary.rejected);

    let meera = store
        .customers()
        .into_iter()
        .find(|c| c.first_name == "Meera")
        .expect("imported above");

    let loans = format!(
        "customer_id,loan_amount,tenure,interest_rate,monthly_repayment,emis_paid_on_time,start_date\n\
         {id},50000,12,12,4442.44,12,2023-01-15T00:00:00Z\n\
         {id},30000,6,14,5213.58,6,2023-09-01T00:00:00Z\n",
        id = meera.id
    );
    let summary = loader.load_loans(loans.as_bytes())?;
    println!("loans: {} inserted, {} rejected", summary.inserted, summary.rejected);

    // two loans on record score 20: subprime tier, 16% floor
    let mut service = LoanOriginationService::new(store);
    let outcome = service.originate_now(
        meera.id,
        Money::from_major(100_000),
        Rate::from_percentage(10),
        24,
    )?;
    println!("approved: {} at {}", outcome.approved, outcome.corrected_rate);

    Ok(())
}
