pub mod swarm_cache;
