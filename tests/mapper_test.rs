//! Width adaptation and type erasure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Exp, Uniform};
use rand_pcg::{Pcg32, Pcg64};

use spmd_random::{
    derive, erase_as_32, erase_as_64, wrap_as_32, wrap_as_64, AnyEngine32, AnyEngine64, BoxedEngine,
    Derivable, RandomEngine, Threefry4x32Engine, Threefry4x64Engine,
};

#[test]
fn test_wrap_as_32_round_trip() {
    let engine = Threefry4x64Engine::new([1, 2, 3, 4]);
    let mut raw = engine;
    let mut mapper = wrap_as_32(engine);

    for _ in 0..100 {
        let lo = mapper.next_word() as u64;
        let hi = mapper.next_word() as u64;
        assert_eq!(lo | (hi << 32), raw.next_word());
    }
}

#[test]
fn test_wrap_as_64_assembles_two_draws() {
    let engine = Threefry4x32Engine::new([5, 6, 7, 8]);
    let mut raw = engine;
    let mut mapper = wrap_as_64(engine);

    for _ in 0..100 {
        let lo = raw.next_word() as u64;
        let hi = raw.next_word() as u64;
        assert_eq!(mapper.next_word(), lo | (hi << 32));
    }
}

#[test]
fn test_same_width_is_pass_through() {
    let engine = Threefry4x64Engine::new([9, 9, 9, 9]);
    let mut raw = engine;
    let mut mapper = wrap_as_64(engine);
    for _ in 0..20 {
        assert_eq!(mapper.next_word(), raw.next_word());
    }
    assert_eq!(mapper.get_ref(), &raw);
}

#[test]
fn test_mapper_min_max_follow_target_width() {
    type M32 = spmd_random::EngineMapper32<Threefry4x64Engine>;
    type M64 = spmd_random::EngineMapper64<Threefry4x32Engine>;
    assert_eq!(M32::min(), 0);
    assert_eq!(M32::max(), u32::MAX);
    assert_eq!(M64::min(), 0);
    assert_eq!(M64::max(), u64::MAX);
}

#[test]
fn test_mapper_derive_ignores_buffered_chunk() {
    let engine = Threefry4x64Engine::new([1, 2, 3, 4]);
    let mut mapper = wrap_as_32(engine);

    // leave half a native word buffered
    mapper.next_word();

    let mut from_mapper = derive(&mapper, 42);
    let mut from_engine = wrap_as_32(derive(mapper.get_ref(), 42));
    for _ in 0..50 {
        assert_eq!(from_mapper.next_word(), from_engine.next_word());
    }
}

#[test]
fn test_mapper_derive_matches_engine_derive() {
    let engine = Threefry4x64Engine::new([4, 3, 2, 1]);
    let mapper = wrap_as_32(engine);

    let mut child_mapper = mapper.derive(9);
    let mut child_engine = engine.derive(9);
    for _ in 0..50 {
        let lo = child_mapper.next_word() as u64;
        let hi = child_mapper.next_word() as u64;
        assert_eq!(lo | (hi << 32), child_engine.next_word());
    }
}

#[test]
fn test_wrap_foreign_engines() {
    // ChaCha is natively 32-bit, PCG64 natively 64-bit
    let chacha = ChaCha20Rng::seed_from_u64(7);
    let mut raw = chacha.clone();
    let mut wide = wrap_as_64(chacha);
    let lo = raw.next_word() as u64;
    let hi = raw.next_word() as u64;
    assert_eq!(wide.next_word(), lo | (hi << 32));

    let pcg = Pcg64::seed_from_u64(7);
    let mut raw = pcg.clone();
    let mut narrow = wrap_as_32(pcg);
    let native = raw.next_word();
    assert_eq!(narrow.next_word(), native as u32);
    assert_eq!(narrow.next_word(), (native >> 32) as u32);
}

#[test]
fn test_boxed_engines_share_one_type() {
    let mut engines: Vec<AnyEngine32> = vec![
        erase_as_32(Threefry4x64Engine::new([1, 2, 3, 4])),
        erase_as_32(ChaCha20Rng::seed_from_u64(1)),
        erase_as_32(Pcg32::seed_from_u64(2)),
        erase_as_32(Pcg64::seed_from_u64(3)),
    ];

    let dist = Uniform::new(0.0f64, 1.0);
    for engine in engines.iter_mut() {
        let mean = (0..10_000).map(|_| dist.sample(engine)).sum::<f64>() / 10_000.0;
        assert!((mean - 0.5).abs() < 0.02, "Mean {mean} from {engine:?}");
    }
}

#[test]
fn test_boxed_engine_matches_concrete_stream() {
    let engine = Threefry4x64Engine::new([1, 2, 3, 4]);
    let mut concrete = wrap_as_32(engine);
    let mut boxed = erase_as_32(engine);

    for _ in 0..64 {
        assert_eq!(boxed.next_word(), concrete.next_word());
    }
}

#[test]
fn test_boxed_derive_passes_through() {
    let engine = Threefry4x64Engine::new([1, 2, 3, 4]);
    let boxed: AnyEngine64 = BoxedEngine::new(engine);

    let mut from_boxed = derive(&boxed, 5);
    let mut from_engine = derive(&engine, 5);
    for _ in 0..32 {
        assert_eq!(from_boxed.next_word(), from_engine.next_word());
    }
}

#[test]
fn test_boxed_clone_is_independent() {
    let mut a = erase_as_64(Pcg64::seed_from_u64(11));
    a.next_word();
    let mut b = a.clone();

    let xs: Vec<u64> = (0..10).map(|_| a.next_word()).collect();
    let ys: Vec<u64> = (0..10).map(|_| b.next_word()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn test_boxed_engine_feeds_distributions() {
    let mut engine = erase_as_64(Threefry4x64Engine::new([2, 4, 6, 8]));
    let exp = Exp::new(2.0).unwrap();

    let n = 20_000;
    let mean = (0..n).map(|_| exp.sample(&mut engine)).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.02, "Exp(2) mean {mean} should be close to 0.5");

    let k: u8 = engine.gen_range(0..10);
    assert!(k < 10);
}

#[test]
fn test_mapper_can_borrow_engine() {
    let mut engine = Threefry4x64Engine::new([1, 2, 3, 4]);
    let mut copy = engine;
    {
        let mut mapper = wrap_as_32(&mut engine);
        mapper.next_word();
        mapper.next_word();
    }
    copy.next_word();
    assert_eq!(engine, copy, "Borrowed engine must advance in place");
}
