use kennel_core::DogService;

#[derive(Clone)]
pub struct KennelState {
    pub service: DogService,
}

impl KennelState {
    pub fn new(service: DogService) -> Self {
        Self { service }
    }
}
