//! Lognormal leak frequency parameters, in leaks per component-year.
//!
//! Rows are ordered like `Component::ALL` and columns like `LeakSize::ALL`.
//! Components without data use the no-data sentinel.

use super::{LeakSize, LeakTable, LognormalParameters};

const NO_DATA: [LognormalParameters; LeakSize::COUNT] =
    [LognormalParameters::NO_DATA; LeakSize::COUNT];

const fn p(mu: f64, sigma: f64) -> LognormalParameters {
    LognormalParameters { mu, sigma }
}

/// Hydrogen, gas phase.
pub(super) static H2_GAS: LeakTable = LeakTable([
    // compressor
    [
        p(-2.3053, 0.3018),
        p(-4.0761, 0.5249),
        p(-5.3881, 0.8212),
        p(-8.7929, 0.7263),
        p(-11.1359, 1.2067),
    ],
    // vessel
    [
        p(-13.477, 0.7347),
        p(-13.641, 0.6387),
        p(-14.0512, 0.6203),
        p(-14.6144, 0.6041),
        p(-15.2732, 0.6156),
    ],
    // filter
    [
        p(-5.2348, 1.6955),
        p(-5.2822, 1.2885),
        p(-5.3303, 1.2879),
        p(-5.3798, 0.7448),
        p(-5.4288, 0.8171),
    ],
    // flange
    [
        p(-3.9125, 1.492),
        p(-6.1191, 1.1345),
        p(-8.3252, 2.0541),
        p(-10.5327, 0.7208),
        p(-12.7385, 1.6925),
    ],
    // hose
    [
        p(-7.4534, 0.3863),
        p(-8.5011, 0.605),
        p(-8.7103, 0.6106),
        p(-8.8001, 0.5901),
        p(-9.6934, 0.9836),
    ],
    // joint
    [
        p(-10.2591, 0.2423),
        p(-12.2703, 0.8727),
        p(-11.7538, 0.5333),
        p(-11.7961, 0.6073),
        p(-11.959, 0.66),
    ],
    // pipe
    [
        p(-11.7331, 0.7162),
        p(-12.5079, 0.707),
        p(-13.8601, 1.2515),
        p(-14.5893, 1.1933),
        p(-15.7354, 1.8486),
    ],
    // valve
    [
        p(-5.8546, 0.25),
        p(-7.4425, 0.4344),
        p(-9.819, 1.1434),
        p(-10.6079, 0.627),
        p(-12.2436, 1.369),
    ],
    // instrument
    [
        p(-7.38, 0.71),
        p(-8.54, 0.85),
        p(-9.1, 0.92),
        p(-9.21, 1.09),
        p(-10.21, 1.49),
    ],
    // exchanger
    NO_DATA,
    // vaporizer
    NO_DATA,
    // arm
    NO_DATA,
    // extra1
    NO_DATA,
    // extra2
    NO_DATA,
]);

/// Hydrogen, saturated phase.
pub(super) static H2_LIQUID: LeakTable = LeakTable([
    // compressor
    NO_DATA,
    // vessel
    [
        p(-7.3426, 1.7799),
        p(-8.8915, 2.5535),
        p(-10.4746, 2.0526),
        p(-12.0829, 2.7255),
        p(-13.6552, 3.1272),
    ],
    // filter
    NO_DATA,
    // flange
    [
        p(-3.9125, 1.492),
        p(-6.1191, 1.1345),
        p(-8.3252, 2.0541),
        p(-10.5327, 0.7208),
        p(-12.7385, 1.6925),
    ],
    // hose
    [
        p(-7.4534, 0.3863),
        p(-8.5011, 0.605),
        p(-8.7103, 0.6106),
        p(-8.8001, 0.5901),
        p(-9.6934, 0.9836),
    ],
    // joint
    [
        p(-10.2591, 0.2423),
        p(-12.2703, 0.8727),
        p(-11.7538, 0.5333),
        p(-11.7961, 0.6073),
        p(-11.959, 0.66),
    ],
    // pipe
    [
        p(-11.7331, 0.7162),
        p(-12.5079, 0.707),
        p(-13.8601, 1.2515),
        p(-14.5893, 1.1933),
        p(-15.7354, 1.8486),
    ],
    // valve
    [
        p(-5.8546, 0.25),
        p(-7.4425, 0.4344),
        p(-9.819, 1.1434),
        p(-10.6079, 0.627),
        p(-12.2436, 1.369),
    ],
    // instrument
    NO_DATA,
    // exchanger
    NO_DATA,
    // vaporizer
    NO_DATA,
    // arm
    NO_DATA,
    // extra1
    NO_DATA,
    // extra2
    NO_DATA,
]);

/// Methane, gas phase. Also used for propane.
pub(super) static CH4_GAS: LeakTable = LeakTable([
    // compressor
    [
        p(0.7785, 1.3159),
        p(-2.2394, 0.9997),
        p(-5.256, 1.0068),
        p(-8.2731, 0.7015),
        p(-11.2905, 1.235),
    ],
    // vessel
    [
        p(-0.4139, 1.3445),
        p(-3.8954, 1.0446),
        p(-7.3613, 0.8054),
        p(-10.8805, 0.6776),
        p(-14.316, 0.6934),
    ],
    // filter
    [
        p(-5.2348, 1.6955),
        p(-5.2822, 1.2885),
        p(-5.3303, 1.2879),
        p(-5.3798, 0.7448),
        p(-5.4288, 0.8171),
    ],
    // flange
    [
        p(-3.9125, 1.492),
        p(-6.1191, 1.1345),
        p(-8.3252, 2.0541),
        p(-10.5327, 0.7208),
        p(-12.7385, 1.6925),
    ],
    // hose
    [
        p(2.5434, 1.2507),
        p(0.3455, 0.9447),
        p(-1.8439, 0.767),
        p(-4.0745, 0.6712),
        p(-6.2263, 1.3906),
    ],
    // joint
    [
        p(-0.6255, 1.2727),
        p(-2.3062, 0.9835),
        p(-4.0101, 0.9541),
        p(-5.6481, 0.5745),
        p(-7.3739, 0.6569),
    ],
    // pipe
    [
        p(-7.9272, 0.9882),
        p(-9.6818, 0.7884),
        p(-11.4317, 1.5059),
        p(-13.2003, 1.2938),
        p(-14.94, 2.1066),
    ],
    // valve
    [
        p(-4.4577, 1.0301),
        p(-6.2603, 0.8332),
        p(-8.0664, 1.5396),
        p(-9.8503, 0.6458),
        p(-11.6738, 1.435),
    ],
    // instrument
    NO_DATA,
    // exchanger
    NO_DATA,
    // vaporizer
    NO_DATA,
    // arm
    NO_DATA,
    // extra1
    NO_DATA,
    // extra2
    NO_DATA,
]);

/// Methane, saturated phase.
pub(super) static CH4_LIQUID: LeakTable = LeakTable([
    // compressor
    NO_DATA,
    // vessel
    [
        p(-7.6443, 1.1463),
        p(-8.8817, 2.2191),
        p(-10.1486, 1.9222),
        p(-11.4202, 2.4219),
        p(-12.6988, 3.1816),
    ],
    // filter
    NO_DATA,
    // flange
    [
        p(-10.0826, 0.7306),
        p(-10.698, 1.2105),
        p(-11.1787, 2.3964),
        p(-11.6591, 2.7634),
        p(-12.1601, 2.915),
    ],
    // hose
    [
        p(-13.3971, 0.7419),
        p(-11.7497, 0.5645),
        p(-10.0943, 4.1882),
        p(-8.4524, 0.9343),
        p(-6.8075, 3.6381),
    ],
    // joint
    [
        p(10.4669, 2.196),
        p(6.1666, 1.6594),
        p(1.8652, 1.1464),
        p(-2.4345, 0.7068),
        p(-6.7363, 0.6198),
    ],
    // pipe
    [
        p(-12.8352, 1.3156),
        p(-13.4479, 1.4332),
        p(-14.0571, 1.1603),
        p(-14.6718, 1.3553),
        p(-15.2867, 1.8314),
    ],
    // valve
    [
        p(-9.3821, 0.7206),
        p(-10.0776, 0.9821),
        p(-10.7378, 1.1534),
        p(-11.3422, 1.9367),
        p(-11.9495, 1.9345),
    ],
    // instrument
    NO_DATA,
    // exchanger
    [
        p(-6.0563, 0.9571),
        p(-7.0191, 1.3035),
        p(-8.0347, 1.4167),
        p(-9.0535, 2.3068),
        p(-10.0834, 1.619),
    ],
    // vaporizer
    [
        p(-4.8184, 2.5489),
        p(-3.6464, 1.8695),
        p(-2.476, 1.2243),
        p(-1.3037, 0.7074),
        p(-0.1328, 0.7068),
    ],
    // arm
    [
        p(-1.6169, 3.0126),
        p(-4.3987, 2.0841),
        p(-7.2019, 1.8945),
        p(-10.3173, 1.0339),
        p(-12.7037, 3.3875),
    ],
    // extra1
    NO_DATA,
    // extra2
    NO_DATA,
]);
