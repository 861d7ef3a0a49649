use parcelwire::{ParcelPool, constants::DEFAULT_PARCEL_POOL_SIZE};
use std::sync::Arc;
use std::thread;

#[test]
fn test_dropped_parcel_returns_cleared() {
    let pool = ParcelPool::default();
    assert_eq!(pool.available(), 0);

    {
        let mut parcel = pool.obtain();
        parcel.write_str("request").unwrap();
    }

    assert_eq!(pool.available(), 1);

    let parcel = pool.obtain();
    assert_eq!(parcel.data_size(), 0);
    assert_eq!(parcel.data_position(), 0);
    assert_eq!(pool.available(), 0);
}

#[test]
fn test_pool_keeps_at_most_capacity() {
    let pool = ParcelPool::default();

    let loans: Vec<_> = (0..DEFAULT_PARCEL_POOL_SIZE + 3)
        .map(|_| pool.obtain())
        .collect();
    drop(loans);

    assert_eq!(pool.available(), DEFAULT_PARCEL_POOL_SIZE);
}

#[test]
fn test_parcel_is_recycled_on_early_return() {
    fn fails_midway(pool: &ParcelPool) -> Result<(), String> {
        let mut parcel = pool.obtain();
        parcel.write_i32(1).map_err(|e| e.to_string())?;
        Err("gave up".to_string())
    }

    let pool = ParcelPool::new(2);
    assert!(fails_midway(&pool).is_err());
    assert_eq!(pool.available(), 1);
}

#[test]
fn test_pool_shared_across_threads() {
    let pool = Arc::new(ParcelPool::new(4));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..100 {
                    let mut parcel = pool.obtain();
                    assert_eq!(parcel.data_size(), 0);
                    parcel.write_i32(i).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(pool.available() <= 4);
}

#[test]
fn test_loaned_parcel_debug_shows_contents() {
    let pool = ParcelPool::default();
    let mut parcel = pool.obtain();
    parcel.write_i32(7).unwrap();

    let shown = format!("{:?}", parcel);
    assert!(shown.starts_with("PooledParcel("), "{}", shown);
    assert!(shown.contains(&format!("{:?}", *parcel)), "{}", shown);
}
